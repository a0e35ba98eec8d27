//! Core error types for quotesync.
//!
//! This module defines backend-agnostic error types. Transport- and
//! storage-specific errors (from reqwest, serde_json, the filesystem) are
//! converted to these types by the backend crates.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the quote application.
#[derive(Error, Debug)]
pub enum Error {
    /// The remote endpoint could not be reached or answered with a
    /// non-success status. Aborts the current sync cycle before any
    /// mutation of the local store.
    #[error("Remote endpoint unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Store operation failed: {0}")]
    Store(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation failures for records submitted by a caller.
///
/// These are rejected synchronously, before the record enters the
/// collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("quote text must not be empty")]
    EmptyText,

    #[error("quote category must not be empty")]
    EmptyCategory,

    #[error("import payload is not a quote array: {0}")]
    InvalidPayload(String),
}
