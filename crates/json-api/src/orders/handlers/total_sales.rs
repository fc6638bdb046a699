//! Total Sales Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::TotalSalesResponse},
    state::State,
};

/// Total Sales Handler
#[endpoint(
    tags("orders"),
    summary = "Total Sales",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Sum of every order total"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Administrator access required"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<TotalSalesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_or_401()?;

    let total = state
        .app
        .orders
        .total_sales()
        .await
        .map_err(into_status_error)?;

    Ok(Json(TotalSalesResponse::new(total)))
}
