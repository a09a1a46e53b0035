mod plot_config;
mod route_status_config;
mod service_config;

pub use plot_config::PlotConfiguration;
pub use route_status_config::RouteStatusConfiguration;
pub use service_config::{
    GeocodingConfiguration, HttpConfiguration, OverpassConfiguration, TrafficConfiguration,
};
