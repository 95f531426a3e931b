//! Error taxonomy for the transfer service.
//!
//! Components return [`Error`] and never retry. The HTTP front door turns each
//! variant into a status code and a short message (see `api::error`), while
//! the scheduler only logs them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid credentials and settings.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The Spotify token endpoint answered with a non-200 status.
    #[error("token endpoint returned {status}: {body}")]
    UpstreamAuth { status: u16, body: String },

    /// An expected upstream resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Any other upstream call answered with an unexpected status.
    #[error("{endpoint} returned {status}: {body}")]
    Upstream {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// A step of the transfer orchestration failed.
    #[error("transfer failed: {0}")]
    TransferFailed(String),

    #[error("missing query parameter `{0}`")]
    MissingParameter(&'static str),

    /// A request body that does not decode into the expected shape.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }
}
