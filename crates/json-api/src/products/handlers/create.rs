//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use shopfront_app::domain::products::{data::NewProduct, records::ProductUuid};

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{ProductRequest, ProductResponse},
    },
    state::State,
};

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Administrator access required"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(json, depot, res),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_or_401()?;

    let uuid = ProductUuid::new();

    tracing::Span::current().record("product_uuid", tracing::field::display(uuid));

    let product = state
        .app
        .products
        .create_product(NewProduct {
            uuid,
            details: json.into_inner().into(),
        })
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/products/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}
