//! User Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// User Record
///
/// The password hash never leaves the repository layer, so it is not part of this record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub uuid: UserUuid,
    pub email: String,
    pub username: String,
    pub is_admin: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A user together with their stored password hash, for credential checks.
#[derive(Clone)]
pub(crate) struct UserCredentials {
    pub(crate) user: UserRecord,
    pub(crate) password_hash: String,
}

impl std::fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredentials")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}
