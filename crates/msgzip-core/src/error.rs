//! Error types for msgzip

use std::io;

/// Result type alias using [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Main error type for message compression
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The gzip encoder could not produce output
    #[error("gzip encoding failed: {0}")]
    Encoding(#[source] io::Error),

    /// The body is not a valid gzip stream
    #[error("gzip decoding failed: {0}")]
    Decoding(#[source] io::Error),

    /// Backing storage for a new body could not be created or written
    #[error("body storage failure: {0}")]
    Resource(#[source] io::Error),

    /// The stream no longer owns a backing resource
    #[error("stream is detached from its resource")]
    Detached,

    /// A body stream was unable to report its size
    #[error("body size is unknown")]
    UnknownSize,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Convert error to HTTP status code
    ///
    /// A body that fails to decode was supplied by the peer, everything else is
    /// a local failure.
    pub fn to_status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::Decoding(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
