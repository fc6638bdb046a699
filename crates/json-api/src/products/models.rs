//! Product wire models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopfront_app::domain::products::{
    data::ProductDetails,
    records::{Category, ProductRecord, Size},
};

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ProductCategory {
    Tops,
    Bottoms,
    Outerwear,
    Footwear,
    Accessories,
}

impl From<Category> for ProductCategory {
    fn from(category: Category) -> Self {
        match category {
            Category::Tops => Self::Tops,
            Category::Bottoms => Self::Bottoms,
            Category::Outerwear => Self::Outerwear,
            Category::Footwear => Self::Footwear,
            Category::Accessories => Self::Accessories,
        }
    }
}

impl From<ProductCategory> for Category {
    fn from(category: ProductCategory) -> Self {
        match category {
            ProductCategory::Tops => Self::Tops,
            ProductCategory::Bottoms => Self::Bottoms,
            ProductCategory::Outerwear => Self::Outerwear,
            ProductCategory::Footwear => Self::Footwear,
            ProductCategory::Accessories => Self::Accessories,
        }
    }
}

/// Product size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ProductSize {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
    OneSize,
}

impl From<Size> for ProductSize {
    fn from(size: Size) -> Self {
        match size {
            Size::Xs => Self::Xs,
            Size::S => Self::S,
            Size::M => Self::M,
            Size::L => Self::L,
            Size::Xl => Self::Xl,
            Size::Xxl => Self::Xxl,
            Size::OneSize => Self::OneSize,
        }
    }
}

impl From<ProductSize> for Size {
    fn from(size: ProductSize) -> Self {
        match size {
            ProductSize::Xs => Self::Xs,
            ProductSize::S => Self::S,
            ProductSize::M => Self::M,
            ProductSize::L => Self::L,
            ProductSize::Xl => Self::Xl,
            ProductSize::Xxl => Self::Xxl,
            ProductSize::OneSize => Self::OneSize,
        }
    }
}

/// Mutable product fields, used for both create and update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub color: Option<String>,
    pub category: ProductCategory,
    pub size: ProductSize,
    /// Price in minor units (cents)
    pub price: u64,
    #[serde(default = "available_by_default")]
    pub available: bool,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Between 0 and 5
    #[serde(default)]
    pub rating: Option<f32>,
}

const fn available_by_default() -> bool {
    true
}

impl From<ProductRequest> for ProductDetails {
    fn from(request: ProductRequest) -> Self {
        ProductDetails {
            name: request.name,
            brand: request.brand,
            color: request.color,
            category: request.category.into(),
            size: request.size.into(),
            price: request.price,
            available: request.available,
            image: request.image,
            description: request.description,
            rating: request.rating,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductPayload {
    /// The unique identifier of the product
    pub uuid: Uuid,
    pub name: String,
    pub brand: String,
    pub color: Option<String>,
    pub category: ProductCategory,
    pub size: ProductSize,
    /// The price of the product in minor units (cents)
    pub price: u64,
    pub available: bool,
    pub image: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f32>,
    /// The date and time the product was created
    pub created_at: String,
    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductPayload {
    fn from(product: ProductRecord) -> Self {
        ProductPayload {
            uuid: product.uuid.into(),
            name: product.name,
            brand: product.brand,
            color: product.color,
            category: product.category.into(),
            size: product.size.into(),
            price: product.price,
            available: product.available,
            image: product.image,
            description: product.description,
            rating: product.rating,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// A single product.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    pub success: bool,
    pub product: ProductPayload,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            success: true,
            product: product.into(),
        }
    }
}

/// A list of products.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    pub success: bool,
    pub products: Vec<ProductPayload>,
}

impl From<Vec<ProductRecord>> for ProductsResponse {
    fn from(products: Vec<ProductRecord>) -> Self {
        Self {
            success: true,
            products: products.into_iter().map(Into::into).collect(),
        }
    }
}
