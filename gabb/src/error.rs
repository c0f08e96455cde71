//! Error types.

use thiserror::Error;

/// The main error type for Gabb operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (connect, timeout, body read).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Login or token refresh was rejected, or returned an unusable token.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The API answered a request with a non-success status.
    #[error("Gabb API error [{status}]: {message}")]
    Api { status: u16, message: String },

    /// Invalid argument passed to an API method.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// A header value could not be encoded.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Operation the API exposes but this client does not support yet.
    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

impl Error {
    /// Create an authentication error.
    pub fn auth(msg: impl Into<String>) -> Self {
        Error::Authentication(msg.into())
    }

    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Error::Api {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is potentially retryable.
    ///
    /// The client never retries on its own; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Network(e) => e.is_timeout() || e.is_connect(),
            Error::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Authentication(_) => true,
            Error::Api { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }
}

/// Result type alias for Gabb operations.
pub type Result<T> = std::result::Result<T, Error>;
