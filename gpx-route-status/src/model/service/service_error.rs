use thiserror::Error;

/// failures talking to one of the external services (Nominatim, Overpass, JARTIC).
/// `service` names the API so that messages stay readable once wrapped.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("failure building http client: {0}")]
    ClientBuildError(String),
    #[error("{service} request to {url} failed: {source}")]
    RequestError {
        service: &'static str,
        url: String,
        source: reqwest::Error,
    },
    #[error("{service} request to {url} failed with status code: {status}")]
    StatusError {
        service: &'static str,
        url: String,
        status: u16,
    },
    #[error("failure decoding {service} response: {message}")]
    DecodeError {
        service: &'static str,
        message: String,
    },
}

impl ServiceError {
    /// true for connection-level failures (timeouts, refused connections)
    /// as opposed to the service answering with an error.
    pub fn is_transport(&self) -> bool {
        match self {
            ServiceError::RequestError { source, .. } => {
                source.is_timeout() || source.is_connect() || source.is_request()
            }
            _ => false,
        }
    }
}
