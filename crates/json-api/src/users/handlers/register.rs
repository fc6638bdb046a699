//! Register User Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopfront_app::domain::users::data::NewUser;

use crate::{
    extensions::*,
    state::State,
    users::{errors::into_status_error, models::UserResponse},
};

/// Register User Request
#[derive(Deserialize, Serialize, ToSchema)]
pub(crate) struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl From<RegisterRequest> for NewUser {
    fn from(request: RegisterRequest) -> Self {
        NewUser {
            email: request.email,
            username: request.username,
            password: request.password,
        }
    }
}

/// Register User Handler
///
/// New accounts are never administrators.
#[endpoint(
    tags("users"),
    summary = "Register",
    responses(
        (status_code = StatusCode::CREATED, description = "User registered"),
        (status_code = StatusCode::CONFLICT, description = "Email address is already registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
#[tracing::instrument(name = "users.register", skip_all, fields(user_uuid = tracing::field::Empty), err)]
pub(crate) async fn handler(
    json: JsonBody<RegisterRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .users
        .register(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("user_uuid", tracing::field::display(user.uuid));

    res.status_code(StatusCode::CREATED);

    Ok(Json(user.into()))
}
