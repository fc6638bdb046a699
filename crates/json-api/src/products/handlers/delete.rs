//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*, products::errors::into_status_error, responses::MessageResponse,
    state::State,
};

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Administrator access required"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Product is still in a cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_or_401()?;

    state
        .app
        .products
        .delete_product(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse::new("Product deleted")))
}
