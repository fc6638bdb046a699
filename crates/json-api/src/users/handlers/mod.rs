//! User Handlers

pub(crate) mod check_email;
pub(crate) mod count;
pub(crate) mod delete;
pub(crate) mod grant_admin;
pub(crate) mod index;
pub(crate) mod login;
pub(crate) mod me;
pub(crate) mod my_cart;
pub(crate) mod my_orders;
pub(crate) mod password;
pub(crate) mod register;
pub(crate) mod revoke_admin;
