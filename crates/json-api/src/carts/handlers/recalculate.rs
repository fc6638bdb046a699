//! Recalculate Cart Subtotal Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Recalculate Cart Subtotal Handler
///
/// Rebuilds the cached subtotal from the items and their current prices.
#[endpoint(
    tags("carts"),
    summary = "Recalculate Cart Subtotal",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Subtotal recalculated"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Administrator access required"),
    ),
)]
#[tracing::instrument(
    name = "carts.recalculate",
    skip(cart, depot),
    fields(cart_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_or_401()?;

    let cart = cart.into_inner();

    tracing::Span::current().record("cart_uuid", tracing::field::display(cart));

    let cart = state
        .app
        .carts
        .recalculate_subtotal(cart.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
