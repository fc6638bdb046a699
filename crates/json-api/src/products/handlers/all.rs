//! All Products Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductsResponse},
    state::State,
};

/// All Products Handler
///
/// Returns every product, including archived ones.
#[endpoint(tags("products"), summary = "List All Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}
