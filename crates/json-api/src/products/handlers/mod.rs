//! Product Handlers

pub(crate) mod activate;
pub(crate) mod all;
pub(crate) mod archive;
pub(crate) mod count;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod search;
pub(crate) mod update;
