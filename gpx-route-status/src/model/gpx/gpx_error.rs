use thiserror::Error;

#[derive(Error, Debug)]
pub enum GpxError {
    #[error("failure reading GPX file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("malformed GPX XML at byte {position}: {message}")]
    XmlError { position: u64, message: String },
    #[error("document is not GPX, no <gpx> element found")]
    NotGpx,
    #[error("point {index} has invalid {attribute}: {message}")]
    InvalidCoordinate {
        index: usize,
        attribute: &'static str,
        message: String,
    },
    #[error("GPX contains no track points")]
    NoTrackPoints,
    #[error("sampling interval must be positive, found {0}")]
    InvalidSampleInterval(usize),
}
