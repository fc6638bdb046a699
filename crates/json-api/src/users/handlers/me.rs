//! Current User Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    state::State,
    users::{errors::into_status_error, models::UserResponse},
};

/// Current User Handler
///
/// Returns the signed-in user's account details.
#[endpoint(
    tags("users"),
    summary = "Current User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Current user"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let claims = depot.claims_or_401()?;

    let user = state
        .app
        .users
        .get_user(claims.user_uuid())
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}
