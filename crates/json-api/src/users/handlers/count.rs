//! User Count Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*, responses::CountResponse, state::State, users::errors::into_status_error,
};

/// User Count Handler
#[endpoint(tags("users"), summary = "Count Users")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CountResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let count = state
        .app
        .users
        .count_users()
        .await
        .map_err(into_status_error)?;

    Ok(Json(CountResponse::new(count)))
}
