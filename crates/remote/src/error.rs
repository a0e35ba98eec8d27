//! Error types for the remote sync crate.

use thiserror::Error;

/// Result type alias for remote sync operations.
pub type Result<T> = std::result::Result<T, RemoteSyncError>;

/// Retry policy class for remote failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteRetryClass {
    Retryable,
    Permanent,
}

/// Errors that can occur while talking to the remote endpoint.
#[derive(Debug, Error)]
pub enum RemoteSyncError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success response from the remote endpoint
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl RemoteSyncError {
    /// Create an API error from status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// HTTP status if this is an API error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Classify error for retry policy.
    pub fn retry_class(&self) -> RemoteRetryClass {
        match self {
            Self::Api { status, .. } => match *status {
                408 | 425 | 429 => RemoteRetryClass::Retryable,
                500..=599 => RemoteRetryClass::Retryable,
                _ => RemoteRetryClass::Permanent,
            },
            Self::Http(_) => RemoteRetryClass::Retryable,
            Self::Json(_) => RemoteRetryClass::Permanent,
        }
    }
}

/// Every remote failure surfaces to the reconciliation service as the
/// endpoint being unavailable; the retry class stays a crate-level concern.
impl From<RemoteSyncError> for quotesync_core::Error {
    fn from(err: RemoteSyncError) -> Self {
        quotesync_core::Error::RemoteUnavailable(err.to_string())
    }
}
