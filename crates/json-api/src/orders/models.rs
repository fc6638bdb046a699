//! Order wire models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopfront_app::domain::orders::records::{OrderItemRecord, OrderRecord};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemPayload {
    pub product_uuid: Uuid,
    pub quantity: u64,
    /// Unit price at the moment of checkout
    pub unit_price: u64,
}

impl From<OrderItemRecord> for OrderItemPayload {
    fn from(item: OrderItemRecord) -> Self {
        OrderItemPayload {
            product_uuid: item.product_uuid.into(),
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderPayload {
    pub uuid: Uuid,
    pub user_uuid: Uuid,
    pub items: Vec<OrderItemPayload>,
    pub subtotal: u64,
    /// Subtotal with the checkout markup applied
    pub total: u64,
    pub created_at: String,
}

impl From<OrderRecord> for OrderPayload {
    fn from(order: OrderRecord) -> Self {
        OrderPayload {
            uuid: order.uuid.into(),
            user_uuid: order.user_uuid.into(),
            items: order.items.into_iter().map(Into::into).collect(),
            subtotal: order.subtotal,
            total: order.total,
            created_at: order.created_at.to_string(),
        }
    }
}

/// A single order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub success: bool,
    pub order: OrderPayload,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        Self {
            success: true,
            order: order.into(),
        }
    }
}

/// A list of orders.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    pub success: bool,
    pub orders: Vec<OrderPayload>,
}

impl From<Vec<OrderRecord>> for OrdersResponse {
    fn from(orders: Vec<OrderRecord>) -> Self {
        Self {
            success: true,
            orders: orders.into_iter().map(Into::into).collect(),
        }
    }
}

/// Sum of every order total.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TotalSalesResponse {
    pub success: bool,
    pub total_sales: u64,
}

impl TotalSalesResponse {
    pub(crate) fn new(total_sales: u64) -> Self {
        Self {
            success: true,
            total_sales,
        }
    }
}

/// Place an order for a user's cart.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    pub user: Uuid,
}
