//! Product Count Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*, products::errors::into_status_error, responses::CountResponse, state::State,
};

/// Product Count Handler
#[endpoint(tags("products"), summary = "Count Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CountResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let count = state
        .app
        .products
        .count_products()
        .await
        .map_err(into_status_error)?;

    Ok(Json(CountResponse::new(count)))
}
