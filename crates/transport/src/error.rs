//! Error types for the transport layer.

use thiserror::Error;

/// Result type alias for transport operations
pub type TransportResult<T> = Result<T, TransportError>;

/// Failures surfaced by the transport layer.
///
/// Remote (`Api`) errors carry the service's own error envelope untouched;
/// interpretation and recovery are left to the caller.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("missing API credentials")]
    MissingCredentials,

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("failed to sign server token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("remote error (status {status}, code {code}): {message}")]
    Api {
        status: u16,
        code: i64,
        message: String,
    },
}

impl TransportError {
    /// HTTP status of a remote error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
