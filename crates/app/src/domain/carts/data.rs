//! Cart Data

use crate::domain::{
    carts::records::CartUuid, products::records::ProductUuid, users::records::UserUuid,
};

/// New Cart Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCart {
    pub uuid: CartUuid,
    pub user_uuid: UserUuid,
}

/// New Cart Item Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub product_uuid: ProductUuid,
    pub quantity: u64,
}
