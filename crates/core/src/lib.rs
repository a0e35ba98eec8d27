//! Quotesync Core - domain entities, reconciliation logic, and traits.
//!
//! This crate is storage- and transport-agnostic: it defines the quote
//! record model, the local store contract, and the reconciliation service
//! that keeps the local collection consistent with a remote source of
//! truth. Concrete backends live in the `storage-json` and `remote` crates
//! and are injected through the traits defined here.

pub mod errors;
pub mod quotes;
pub mod store;
pub mod sync;

pub use errors::Error;
pub use errors::Result;
