//! User Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    state::State,
    users::{errors::into_status_error, models::UsersResponse},
};

/// User Index Handler
#[endpoint(
    tags("users"),
    summary = "List Users",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Users listed"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Administrator access required"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UsersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_or_401()?;

    let users = state
        .app
        .users
        .list_users()
        .await
        .map_err(into_status_error)?;

    Ok(Json(users.into()))
}
