//! Order Records

use jiff::Timestamp;

use crate::{
    domain::{products::records::ProductUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub items: Vec<OrderItemRecord>,
    pub subtotal: u64,
    pub total: u64,
    pub created_at: Timestamp,
}

/// Order line, frozen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderItemRecord {
    pub product_uuid: ProductUuid,
    pub quantity: u64,
    pub unit_price: u64,
}
