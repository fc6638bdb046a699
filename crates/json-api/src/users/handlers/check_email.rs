//! Check Email Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State, users::errors::into_status_error};

/// Check Email Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckEmailRequest {
    pub email: String,
}

/// Check Email Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckEmailResponse {
    pub success: bool,
    /// Whether an account already uses the address
    pub exists: bool,
}

/// Check Email Handler
#[endpoint(tags("users"), summary = "Check Email Registered")]
pub(crate) async fn handler(
    json: JsonBody<CheckEmailRequest>,
    depot: &mut Depot,
) -> Result<Json<CheckEmailResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let exists = state
        .app
        .users
        .email_exists(&json.into_inner().email)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CheckEmailResponse {
        success: true,
        exists,
    }))
}
