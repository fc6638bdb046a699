//! Cart Items

mod handlers;
mod models;

pub(crate) use handlers::*;
