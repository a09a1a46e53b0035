use geo::Coord;
use serde::{Deserialize, Serialize};

/// the kinds of line drawn on the route map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    Route,
    ClosedRoad,
    RestrictedRoad,
}

impl TraceKind {
    pub fn name(&self) -> &'static str {
        match self {
            TraceKind::Route => "Route",
            TraceKind::ClosedRoad => "Closed Road",
            TraceKind::RestrictedRoad => "Restricted Road",
        }
    }

    pub fn line_style(&self) -> LineStyle {
        let (color, width) = match self {
            TraceKind::Route => ("blue", 3.0),
            TraceKind::ClosedRoad => ("red", 5.0),
            TraceKind::RestrictedRoad => ("orange", 4.0),
        };
        LineStyle {
            color: String::from(color),
            width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
}

/// a plotly `scattermapbox` line trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapTrace {
    #[serde(rename = "type")]
    pub trace_type: String,
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    pub mode: String,
    pub line: LineStyle,
    pub name: String,
}

impl MapTrace {
    pub const TRACE_TYPE: &'static str = "scattermapbox";

    pub fn new(kind: TraceKind, coords: &[Coord<f64>]) -> MapTrace {
        MapTrace {
            trace_type: String::from(Self::TRACE_TYPE),
            lat: coords.iter().map(|c| c.y).collect(),
            lon: coords.iter().map(|c| c.x).collect(),
            mode: String::from("lines"),
            line: kind.line_style(),
            name: String::from(kind.name()),
        }
    }

    pub fn len(&self) -> usize {
        self.lat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lat.is_empty()
    }
}
