//! Product Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
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
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Raised when a stored or submitted enum label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} \"{value}\"")]
pub struct UnknownVariantError {
    kind: &'static str,
    value: String,
}

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Tops,
    Bottoms,
    Outerwear,
    Footwear,
    Accessories,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tops => "tops",
            Self::Bottoms => "bottoms",
            Self::Outerwear => "outerwear",
            Self::Footwear => "footwear",
            Self::Accessories => "accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "tops" => Ok(Self::Tops),
            "bottoms" => Ok(Self::Bottoms),
            "outerwear" => Ok(Self::Outerwear),
            "footwear" => Ok(Self::Footwear),
            "accessories" => Ok(Self::Accessories),
            other => Err(UnknownVariantError {
                kind: "category",
                value: other.to_string(),
            }),
        }
    }
}

/// Product size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
    OneSize,
}

impl Size {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::S => "s",
            Self::M => "m",
            Self::L => "l",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
            Self::OneSize => "one_size",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "xs" => Ok(Self::Xs),
            "s" => Ok(Self::S),
            "m" => Ok(Self::M),
            "l" => Ok(Self::L),
            "xl" => Ok(Self::Xl),
            "xxl" => Ok(Self::Xxl),
            "one_size" => Ok(Self::OneSize),
            other => Err(UnknownVariantError {
                kind: "size",
                value: other.to_string(),
            }),
        }
    }
}
