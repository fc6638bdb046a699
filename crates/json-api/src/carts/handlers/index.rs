//! List Carts Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{errors::into_status_error, models::CartsResponse},
    extensions::*,
    state::State,
};

/// List Carts Handler
#[endpoint(
    tags("carts"),
    summary = "List Carts",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Every cart"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Administrator access required"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_or_401()?;

    let carts = state
        .app
        .carts
        .list_carts()
        .await
        .map_err(into_status_error)?;

    Ok(Json(carts.into()))
}
