//! Orders By User Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use shopfront_app::domain::users::records::UserUuid;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrdersResponse},
    state::State,
};

/// Orders By User Handler
#[endpoint(
    tags("orders"),
    summary = "Orders By User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "The user's orders"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let claims = depot.claims_or_401()?;

    let user = UserUuid::from_uuid(user.into_inner());

    if !claims.may_act_for(user) {
        return Err(StatusError::unauthorized().brief("Cannot read another user's orders"));
    }

    let orders = state
        .app
        .orders
        .list_orders_for_user(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.into()))
}
