use crate::config::PlotConfiguration;
use geo::Coord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLayout {
    pub mapbox: MapboxLayout,
    pub height: u32,
    pub margin: Margin,
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapboxLayout {
    pub style: String,
    pub zoom: f64,
    pub center: MapCenter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accesstoken: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

/// legend box in the top left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub traceorder: String,
    pub bgcolor: String,
    pub bordercolor: String,
    pub borderwidth: u32,
    pub font: LegendFont,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendFont {
    pub family: String,
    pub size: u32,
    pub color: String,
}

impl MapLayout {
    pub fn new(center: Coord<f64>, conf: &PlotConfiguration) -> MapLayout {
        MapLayout {
            mapbox: MapboxLayout {
                style: conf.map_style.clone(),
                zoom: conf.zoom,
                center: MapCenter {
                    lat: center.y,
                    lon: center.x,
                },
                accesstoken: conf.mapbox_token.clone(),
            },
            height: conf.height,
            margin: Margin {
                l: 0,
                r: 0,
                t: 0,
                b: 0,
            },
            legend: Legend::default(),
        }
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            x: 0.01,
            y: 0.99,
            traceorder: String::from("normal"),
            bgcolor: String::from("rgba(255, 255, 255, 0.5)"),
            bordercolor: String::from("Black"),
            borderwidth: 1,
            font: LegendFont {
                family: String::from("Arial"),
                size: 14,
                color: String::from("green"),
            },
        }
    }
}
