use super::{gpx::GpxError, service::ServiceError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteStatusError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading GPX route: {source}")]
    GpxError {
        #[from]
        source: GpxError,
    },
    #[error("{source}")]
    ServiceError {
        #[from]
        source: ServiceError,
    },
    #[error("failure writing {0}: {1}")]
    OutputError(String, String),
    #[error("failure writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("{0}")]
    InternalError(String),
}
