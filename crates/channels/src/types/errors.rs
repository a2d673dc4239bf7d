//! Error types for channel operations.

use thiserror::Error;

use crosstalk_transport::TransportError;

/// Result type alias for channel operations
pub type ChannelResult<T> = Result<T, ChannelError>;

/// Failures surfaced by channel operations.
///
/// Validation errors are raised locally before any request is made;
/// transport and remote errors propagate unchanged from the transport
/// layer. A failed operation never partially applies local state: merging
/// only happens after a successful response.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("invalid response payload: {0}")]
    Response(#[from] serde_json::Error),
}

impl ChannelError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
