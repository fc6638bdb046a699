//! Create Order Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    carts::errors::into_status_error,
    extensions::*,
    orders::models::{CreateOrderRequest, OrderResponse},
    state::State,
};

/// Create Order Handler
///
/// Checks out the given user's cart. Callers may only order for themselves
/// unless they are an administrator.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "The cart is empty"),
        (status_code = StatusCode::NOT_FOUND, description = "The user has no cart"),
        (status_code = StatusCode::CONFLICT, description = "The cart changed during checkout"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
#[tracing::instrument(
    name = "orders.create",
    skip_all,
    fields(user_uuid = tracing::field::Empty, order_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let claims = depot.claims_or_401()?;

    let user = json.into_inner().user;

    tracing::Span::current().record("user_uuid", tracing::field::display(user));

    if !claims.may_act_for(user.into()) {
        return Err(StatusError::unauthorized().brief("Cannot order for another user"));
    }

    let order = state
        .app
        .carts
        .checkout_for_user(user.into())
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("order_uuid", tracing::field::display(order.uuid));

    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
