//! JSON-file storage backend for the quote collection.
//!
//! The entire collection lives in one JSON slot on disk, matching the
//! read-all/write-all contract of the core store trait: loads of a missing
//! or malformed slot yield an empty collection, and every save rewrites the
//! whole document.

mod store;

pub use store::JsonFileQuoteStore;
