//! Checkout Cart Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{access::accessible_cart, errors::into_status_error},
    extensions::*,
    orders::models::OrderResponse,
    state::State,
};

/// Checkout Cart Handler
///
/// Turns the cart into an order at current prices plus the checkout markup,
/// then empties the cart.
#[endpoint(
    tags("carts", "orders"),
    summary = "Checkout Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "The cart is empty"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::CONFLICT, description = "The cart changed during checkout"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
#[tracing::instrument(
    name = "carts.checkout",
    skip(cart, depot, res),
    fields(cart_uuid = tracing::field::Empty, order_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let claims = depot.claims_or_401()?;

    let cart = cart.into_inner();

    tracing::Span::current().record("cart_uuid", tracing::field::display(cart));

    let cart = accessible_cart(state, &claims, cart.into()).await?;

    let order = state
        .app
        .carts
        .checkout(cart.uuid)
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("order_uuid", tracing::field::display(order.uuid));

    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
