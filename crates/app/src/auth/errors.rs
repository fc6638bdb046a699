//! Authentication errors.

use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use thiserror::Error;

/// Raised when issuing or verifying a bearer token fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token is invalid")]
    Invalid,

    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl From<JwtError> for TokenError {
    fn from(error: JwtError) -> Self {
        match error.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Invalid,
        }
    }
}

/// Raised when hashing or checking a password fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("password must be at least {0} characters")]
    TooShort(usize),

    #[error("password does not match")]
    Mismatch,

    #[error("failed to hash password")]
    Hash,
}
