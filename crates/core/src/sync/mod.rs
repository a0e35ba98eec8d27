//! Sync domain models and services.

mod merge;
mod scheduler;
mod sync_model;
mod sync_service;

pub use merge::*;
pub use scheduler::*;
pub use sync_model::*;
pub use sync_service::*;
