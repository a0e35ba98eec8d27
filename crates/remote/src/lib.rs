//! Quotesync Remote - client for the placeholder quote endpoint.
//!
//! This crate provides the REST client and wire types for the
//! jsonplaceholder-shaped remote endpoint, and the reqwest-backed
//! implementation of the core `RemoteEndpoint` trait.

mod client;
mod error;
mod types;

pub use client::{RemoteSyncClient, DEFAULT_REMOTE_BASE_URL};
pub use error::{RemoteRetryClass, RemoteSyncError, Result};
pub use types::*;
