//! Cart Handlers

pub(crate) mod checkout;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod recalculate;
