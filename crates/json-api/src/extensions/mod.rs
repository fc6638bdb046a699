//! Extension traits

mod auth;
mod depot;
mod result;

pub(crate) use auth::AuthDepotExt as _;
pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;
