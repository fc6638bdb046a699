//! Activate Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Activate Product Handler
///
/// Puts an archived product back on sale.
#[endpoint(
    tags("products"),
    summary = "Activate Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product activated"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Administrator access required"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
#[tracing::instrument(
    name = "products.activate",
    skip(product, depot),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_or_401()?;

    let product = product.into_inner();

    tracing::Span::current().record("product_uuid", tracing::field::display(product));

    let product = state
        .app
        .products
        .activate_product(product.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
