//! Get Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderResponse},
    state::State,
};

/// Get Order Handler
///
/// Orders belonging to someone else are reported as missing.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order found"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let claims = depot.claims_or_401()?;

    let order = state
        .app
        .orders
        .get_order(order.into_inner().into())
        .await
        .map_err(into_status_error)?;

    if !claims.may_act_for(order.user_uuid) {
        return Err(StatusError::not_found().brief("Order not found"));
    }

    Ok(Json(order.into()))
}
