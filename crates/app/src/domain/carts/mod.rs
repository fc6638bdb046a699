//! Carts

pub mod data;
pub mod errors;
pub mod ledger;
pub mod records;
mod repositories;
pub mod service;

pub use errors::CartsServiceError;
pub use service::*;
