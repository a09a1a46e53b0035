use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct PlotConfiguration {
    /// plotly mapbox style, e.g. `open-street-map` or a `mapbox://` style url
    pub map_style: String,
    /// required by Mapbox-hosted styles
    pub mapbox_token: Option<String>,
    pub zoom: f64,
    pub height: u32,
    /// distance within which a closed stretch endpoint matches a route point
    pub closed_section_tolerance_meters: f64,
}

impl Default for PlotConfiguration {
    fn default() -> Self {
        Self {
            map_style: String::from("open-street-map"),
            mapbox_token: None,
            zoom: 10.0,
            height: 800,
            closed_section_tolerance_meters: 50.0,
        }
    }
}
