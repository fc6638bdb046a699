//! Count Orders Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*, orders::errors::into_status_error, responses::CountResponse, state::State,
};

/// Count Orders Handler
#[endpoint(
    tags("orders"),
    summary = "Count Orders",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Number of orders"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Administrator access required"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CountResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_or_401()?;

    let count = state
        .app
        .orders
        .count_orders()
        .await
        .map_err(into_status_error)?;

    Ok(Json(CountResponse::new(count)))
}
