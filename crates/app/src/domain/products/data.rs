//! Product Data

use crate::domain::products::records::{Category, ProductUuid, Size};

/// Mutable product fields, written on create and replaced wholesale on update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub name: String,
    pub brand: String,
    pub color: Option<String>,
    pub category: Category,
    pub size: Size,
    pub price: u64,
    pub available: bool,
    pub image: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f32>,
}

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub details: ProductDetails,
}
