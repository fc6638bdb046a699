//! Users service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::auth::PasswordError;

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("email address is already registered")]
    EmailTaken,

    #[error("user not found")]
    NotFound,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("password must be at least {0} characters")]
    WeakPassword(usize),

    #[error("failed to hash password")]
    PasswordHash,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for UsersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::EmailTaken,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl From<PasswordError> for UsersServiceError {
    fn from(error: PasswordError) -> Self {
        match error {
            PasswordError::TooShort(min) => Self::WeakPassword(min),
            PasswordError::Mismatch => Self::InvalidCredentials,
            PasswordError::Hash => Self::PasswordHash,
        }
    }
}
