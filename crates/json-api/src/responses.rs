//! Response bodies shared across resources.
//!
//! Every successful response carries `"success": true` next to its payload.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// A single count.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CountResponse {
    pub success: bool,
    pub count: u64,
}

impl CountResponse {
    pub(crate) fn new(count: u64) -> Self {
        Self {
            success: true,
            count,
        }
    }
}

/// A human-readable confirmation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
