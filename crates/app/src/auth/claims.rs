//! Bearer token claims.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::users::records::UserUuid;

/// Claims carried by every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user UUID).
    pub sub: Uuid,
    /// Whether the subject may use administrative endpoints.
    pub is_admin: bool,
    /// Issued at, in seconds since the epoch.
    pub iat: i64,
    /// Expiry, in seconds since the epoch.
    pub exp: i64,
    /// Issuer.
    pub iss: String,
}

impl Claims {
    #[must_use]
    pub const fn user_uuid(&self) -> UserUuid {
        UserUuid::from_uuid(self.sub)
    }

    /// Admins act for anyone, everybody else only for themselves.
    #[must_use]
    pub fn may_act_for(&self, user: UserUuid) -> bool {
        self.is_admin || self.user_uuid() == user
    }
}
