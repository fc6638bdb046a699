//! User wire models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopfront_app::domain::users::records::UserRecord;

/// Public account details. The password hash never leaves the service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserPayload {
    pub uuid: Uuid,
    pub email: String,
    pub username: String,
    pub is_admin: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserRecord> for UserPayload {
    fn from(user: UserRecord) -> Self {
        UserPayload {
            uuid: user.uuid.into(),
            email: user.email,
            username: user.username,
            is_admin: user.is_admin,
            created_at: user.created_at.to_string(),
            updated_at: user.updated_at.to_string(),
        }
    }
}

/// A single user.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    pub success: bool,
    pub user: UserPayload,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            success: true,
            user: user.into(),
        }
    }
}

/// A list of users.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UsersResponse {
    pub success: bool,
    pub users: Vec<UserPayload>,
}

impl From<Vec<UserRecord>> for UsersResponse {
    fn from(users: Vec<UserRecord>) -> Self {
        Self {
            success: true,
            users: users.into_iter().map(Into::into).collect(),
        }
    }
}
