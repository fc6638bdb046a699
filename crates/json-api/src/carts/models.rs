//! Cart wire models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopfront_app::domain::carts::records::{CartItemRecord, CartRecord};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemPayload {
    pub product_uuid: Uuid,
    pub quantity: u64,
    /// Current unit price of the product in minor units
    pub price: u64,
}

impl From<CartItemRecord> for CartItemPayload {
    fn from(item: CartItemRecord) -> Self {
        CartItemPayload {
            product_uuid: item.product_uuid.into(),
            quantity: item.quantity,
            price: item.price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartPayload {
    pub uuid: Uuid,
    pub user_uuid: Uuid,
    pub items: Vec<CartItemPayload>,
    /// Running subtotal in minor units
    pub subtotal: u64,
    /// Bumped on every change to the cart
    pub version: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CartRecord> for CartPayload {
    fn from(cart: CartRecord) -> Self {
        CartPayload {
            uuid: cart.uuid.into(),
            user_uuid: cart.user_uuid.into(),
            items: cart.items.into_iter().map(Into::into).collect(),
            subtotal: cart.subtotal,
            version: cart.version,
            created_at: cart.created_at.to_string(),
            updated_at: cart.updated_at.to_string(),
        }
    }
}

/// A single cart.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    pub success: bool,
    pub cart: CartPayload,
}

impl From<CartRecord> for CartResponse {
    fn from(cart: CartRecord) -> Self {
        Self {
            success: true,
            cart: cart.into(),
        }
    }
}

/// A list of carts.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartsResponse {
    pub success: bool,
    pub carts: Vec<CartPayload>,
}

impl From<Vec<CartRecord>> for CartsResponse {
    fn from(carts: Vec<CartRecord>) -> Self {
        Self {
            success: true,
            carts: carts.into_iter().map(Into::into).collect(),
        }
    }
}

/// The line items of a cart.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemsResponse {
    pub success: bool,
    pub items: Vec<CartItemPayload>,
}

impl From<Vec<CartItemRecord>> for CartItemsResponse {
    fn from(items: Vec<CartItemRecord>) -> Self {
        Self {
            success: true,
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}
