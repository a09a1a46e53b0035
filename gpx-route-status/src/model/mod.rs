pub mod geocode;
pub mod gpx;
pub mod overpass;
pub mod plot;
mod route_status_error;
pub mod service;
pub mod traffic;

pub use route_status_error::RouteStatusError;
