//! Order Data

use crate::domain::{
    orders::records::{OrderItemRecord, OrderUuid},
    users::records::UserUuid,
};

/// New Order Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub items: Vec<OrderItemRecord>,
    pub subtotal: u64,
    pub total: u64,
}
