//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{ProductRequest, ProductResponse},
    },
    state::State,
};

/// Product Update Handler
///
/// Replaces every mutable field of the product.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Administrator access required"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(product, json, depot),
    fields(
        product_uuid = tracing::field::Empty,
        price = tracing::field::Empty,
    ),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_or_401()?;

    let request = json.into_inner();
    let product = product.into_inner();

    let span = tracing::Span::current();

    span.record("product_uuid", tracing::field::display(product));
    span.record("price", request.price);

    let updated = state
        .app
        .products
        .update_product(product.into(), request.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_uuid = %product, price = updated.price, "updated product");

    Ok(Json(updated.into()))
}
