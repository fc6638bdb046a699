//! Delete User Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*, responses::MessageResponse, state::State, users::errors::into_status_error,
};

/// Delete User Handler
///
/// Removes the account and its cart. Past orders are kept.
#[endpoint(
    tags("users"),
    summary = "Delete User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "User deleted"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Administrator access required"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
    ),
)]
#[tracing::instrument(
    name = "users.delete",
    skip_all,
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_or_401()?;

    let user = user.into_inner();

    tracing::Span::current().record("user_uuid", tracing::field::display(user));

    state
        .app
        .users
        .delete_user(user.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse::new("User deleted")))
}
