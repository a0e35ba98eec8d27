//! Quote domain models and services.

mod quote_model;
mod quote_service;

pub use quote_model::*;
pub use quote_service::*;
