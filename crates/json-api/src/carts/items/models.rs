//! Cart item request models.

use salvo::oapi::ToSchema;
use serde::Deserialize;
use uuid::Uuid;

use shopfront_app::domain::carts::data::NewCartItem;

/// Add a product to a cart.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub(crate) struct AddItemRequest {
    pub product_uuid: Uuid,
    pub quantity: u64,
}

impl From<AddItemRequest> for NewCartItem {
    fn from(request: AddItemRequest) -> Self {
        NewCartItem {
            product_uuid: request.product_uuid.into(),
            quantity: request.quantity,
        }
    }
}

/// Overwrite the quantity of a cart line.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub(crate) struct SetQuantityRequest {
    pub quantity: u64,
}
