//! Cart Records

use jiff::Timestamp;

use crate::{
    domain::{products::records::ProductUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<CartRecord>;

/// Cart Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRecord {
    pub uuid: CartUuid,
    pub user_uuid: UserUuid,
    pub items: Vec<CartItemRecord>,
    /// Cached running subtotal; not recomputed from `items` on every change.
    pub subtotal: u64,
    /// Bumped on every write, used to detect concurrent modification.
    pub version: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// CartItem Record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItemRecord {
    pub product_uuid: ProductUuid,
    pub quantity: u64,
    /// Current unit price of the product.
    pub price: u64,
}
