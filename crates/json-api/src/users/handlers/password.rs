//! Change Password Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopfront_app::domain::users::data::PasswordChange;

use crate::{
    extensions::*, responses::MessageResponse, state::State, users::errors::into_status_error,
};

/// Change Password Request
#[derive(Deserialize, Serialize, ToSchema)]
pub(crate) struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

impl std::fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangePasswordRequest").finish_non_exhaustive()
    }
}

impl From<ChangePasswordRequest> for PasswordChange {
    fn from(request: ChangePasswordRequest) -> Self {
        PasswordChange {
            current_password: request.current_password,
            new_password: request.new_password,
        }
    }
}

/// Change Password Handler
#[endpoint(
    tags("users"),
    summary = "Change Password",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Password changed"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Current password is wrong"),
        (status_code = StatusCode::BAD_REQUEST, description = "New password is too short"),
    ),
)]
#[tracing::instrument(name = "users.change_password", skip_all, fields(user_uuid = tracing::field::Empty), err)]
pub(crate) async fn handler(
    json: JsonBody<ChangePasswordRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let claims = depot.claims_or_401()?;
    let user = claims.user_uuid();

    tracing::Span::current().record("user_uuid", tracing::field::display(user));

    state
        .app
        .users
        .change_password(user, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse::new("Password changed")))
}
