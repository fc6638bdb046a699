//! Grant Admin Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    state::State,
    users::{errors::into_status_error, models::UserResponse},
};

/// Grant Admin Handler
#[endpoint(
    tags("users"),
    summary = "Grant Admin",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "User is now an administrator"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Administrator access required"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
    ),
)]
#[tracing::instrument(
    name = "users.grant_admin",
    skip_all,
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_or_401()?;

    let user = user.into_inner();

    tracing::Span::current().record("user_uuid", tracing::field::display(user));

    let user = state
        .app
        .users
        .set_admin(user.into(), true)
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}
