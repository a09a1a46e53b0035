mod gpx_error;
pub mod gpx_ops;
mod route;

pub use gpx_error::GpxError;
pub use route::Route;
