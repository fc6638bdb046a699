//! Product Search Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductsResponse},
    state::State,
};

/// Product Search Handler
///
/// Case-insensitive substring match on product names.
#[endpoint(tags("products"), summary = "Search Products by Name")]
pub(crate) async fn handler(
    name: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .search_products(&name.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}
