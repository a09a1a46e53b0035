pub mod check;
pub mod roads;
mod route_status_cli;
mod services;

pub use route_status_cli::{RouteStatusCliArguments, RouteStatusOperation};
pub use services::RouteStatusServices;
