//! Carts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::carts::ledger::LedgerError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart already exists")]
    AlreadyExists,

    #[error("cart not found")]
    NotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error("item not found in cart")]
    ItemNotFound,

    #[error("product is not available")]
    Unavailable,

    #[error("quantity must be greater than zero")]
    InvalidQuantity,

    #[error("cart is empty")]
    EmptyCart,

    #[error("amount out of range")]
    Overflow,

    #[error("cart was modified concurrently")]
    Conflict,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl From<LedgerError> for CartsServiceError {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::InvalidQuantity => Self::InvalidQuantity,
            LedgerError::Unavailable => Self::Unavailable,
            LedgerError::ItemNotFound => Self::ItemNotFound,
            LedgerError::EmptyCart => Self::EmptyCart,
            LedgerError::Overflow => Self::Overflow,
        }
    }
}
