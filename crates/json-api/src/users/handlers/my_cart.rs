//! Current User's Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Current User's Cart Handler
#[endpoint(
    tags("users", "carts"),
    summary = "Current User's Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart found"),
        (status_code = StatusCode::NOT_FOUND, description = "The user has no cart"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let claims = depot.claims_or_401()?;

    let cart = state
        .app
        .carts
        .get_cart_for_user(claims.user_uuid())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
