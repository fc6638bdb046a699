//! Authentication

use shopfront_app::auth::Claims;

pub(crate) mod middleware;

/// Who the caller is, as far as the bearer token tells us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Authentication {
    /// No `Authorization` header.
    Anonymous,

    /// A header was sent but it did not carry a valid token.
    Rejected,

    /// A valid, unexpired token.
    Authenticated(Claims),
}
