//! Password hashing with Argon2id.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use once_cell::sync::Lazy;

use crate::auth::PasswordError;

/// Shortest password accepted on registration or change.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hash verified when no account matches, hashed with the same parameters as real ones.
static DECOY_HASH: Lazy<Option<String>> =
    Lazy::new(|| hash_password("shopfront decoy password").ok());

/// Check a candidate password against the length policy.
///
/// # Errors
///
/// Returns [`PasswordError::TooShort`] when the password has fewer than
/// [`MIN_PASSWORD_LENGTH`] characters.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort(MIN_PASSWORD_LENGTH));
    }

    Ok(())
}

/// Hash a password into a PHC string with a fresh random salt.
///
/// # Errors
///
/// Returns [`PasswordError::Hash`] if the hasher rejects its input.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_hash_error| PasswordError::Hash)
}

/// Verify a password against a stored PHC string.
///
/// # Errors
///
/// Returns [`PasswordError::Mismatch`] when the password is wrong or the stored hash is unreadable.
pub fn verify_password(password: &str, hash: &str) -> Result<(), PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(|_parse_error| PasswordError::Mismatch)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_verify_error| PasswordError::Mismatch)
}

/// Spend one full verification on a password that has no account, then reject it.
///
/// Login attempts for unknown emails take as long as wrong passwords for known ones.
pub fn reject_without_account(password: &str) -> PasswordError {
    if let Some(hash) = DECOY_HASH.as_deref() {
        _ = verify_password(password, hash);
    }

    PasswordError::Mismatch
}
