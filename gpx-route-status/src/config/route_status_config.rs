use super::{
    GeocodingConfiguration, HttpConfiguration, OverpassConfiguration, PlotConfiguration,
    TrafficConfiguration,
};
use crate::model::RouteStatusError;
use serde::{Deserialize, Serialize};

/// settings for a route status run. every field has a default so that a
/// configuration file only needs to name what it changes.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct RouteStatusConfiguration {
    /// reverse geocode every n-th GPX point
    pub gpx_points_interval: usize,
    pub http: HttpConfiguration,
    pub geocoding: GeocodingConfiguration,
    pub overpass: OverpassConfiguration,
    pub traffic: TrafficConfiguration,
    pub plot: PlotConfiguration,
}

impl Default for RouteStatusConfiguration {
    fn default() -> Self {
        Self {
            gpx_points_interval: 400,
            http: Default::default(),
            geocoding: Default::default(),
            overpass: Default::default(),
            traffic: Default::default(),
            plot: Default::default(),
        }
    }
}

impl RouteStatusConfiguration {
    pub const ENV_PREFIX: &'static str = "GPX_ROUTE_STATUS";
    pub const ENV_SEPARATOR: &'static str = "__";
    pub const MAPBOX_SECRET: &'static str = "MAPBOX_SECRET";
    pub const MAPBOX_STYLE: &'static str = "MAPBOX_STYLE";

    /// layers the defaults, an optional `.toml` or `.json` file and
    /// `GPX_ROUTE_STATUS__*` environment variables, then applies the
    /// `MAPBOX_SECRET`/`MAPBOX_STYLE` overrides.
    pub fn load(configuration_file: Option<&str>) -> Result<Self, RouteStatusError> {
        let defaults = config::Config::try_from(&RouteStatusConfiguration::default())
            .map_err(|e| RouteStatusError::ConfigurationError(e.to_string()))?;
        let mut builder = config::Config::builder().add_source(defaults);
        if let Some(f) = configuration_file {
            log::info!("reading configuration from {f}");
            let format = if f.ends_with(".toml") {
                config::FileFormat::Toml
            } else if f.ends_with(".json") {
                config::FileFormat::Json
            } else {
                return Err(RouteStatusError::ConfigurationError(format!(
                    "unsupported file type: {f}"
                )));
            };
            builder = builder.add_source(config::File::new(f, format).required(true));
        }
        let conf = builder
            .add_source(
                config::Environment::with_prefix(Self::ENV_PREFIX)
                    .separator(Self::ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| RouteStatusError::ConfigurationError(e.to_string()))?
            .try_deserialize::<RouteStatusConfiguration>()
            .map_err(|e| RouteStatusError::ConfigurationError(e.to_string()))?
            .with_mapbox_env(
                std::env::var(Self::MAPBOX_SECRET).ok(),
                std::env::var(Self::MAPBOX_STYLE).ok(),
            );
        conf.validate()?;
        Ok(conf)
    }

    /// applies the Mapbox token and style, when set and non-empty.
    pub fn with_mapbox_env(mut self, secret: Option<String>, style: Option<String>) -> Self {
        if let Some(token) = secret.filter(|s| !s.trim().is_empty()) {
            self.plot.mapbox_token = Some(token);
        }
        if let Some(style) = style.filter(|s| !s.trim().is_empty()) {
            self.plot.map_style = style;
        }
        self
    }

    pub fn validate(&self) -> Result<(), RouteStatusError> {
        if self.gpx_points_interval == 0 {
            return Err(RouteStatusError::ConfigurationError(String::from(
                "gpx_points_interval must be positive",
            )));
        }
        if self.plot.closed_section_tolerance_meters.is_nan()
            || self.plot.closed_section_tolerance_meters <= 0.0
        {
            return Err(RouteStatusError::ConfigurationError(format!(
                "plot.closed_section_tolerance_meters must be positive, found {}",
                self.plot.closed_section_tolerance_meters
            )));
        }
        if self.http.timeout_secs == 0 {
            return Err(RouteStatusError::ConfigurationError(String::from(
                "http.timeout_secs must be positive",
            )));
        }
        Ok(())
    }
}
