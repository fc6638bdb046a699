//! Signed access tokens (HS256 JWT).

use std::fmt;

use jiff::Timestamp;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockall::automock;

use crate::{
    auth::{Claims, TokenError},
    domain::users::records::UserRecord,
};

/// Issuer written into tokens when none is configured.
pub const DEFAULT_TOKEN_ISSUER: &str = "shopfront";

/// Token lifetime when none is configured.
pub const DEFAULT_TOKEN_TTL_HOURS: u64 = 24;

const SECONDS_PER_HOUR: i64 = 3600;

/// Token signing configuration.
#[derive(Clone)]
pub struct TokenConfig {
    /// Shared HMAC secret.
    pub secret: String,
    /// Value of the `iss` claim, checked on verification.
    pub issuer: String,
    /// How long an issued token stays valid.
    pub ttl_hours: u64,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: DEFAULT_TOKEN_ISSUER.to_string(),
            ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
        }
    }

    #[must_use]
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    #[must_use]
    pub fn with_ttl_hours(mut self, hours: u64) -> Self {
        self.ttl_hours = hours;
        self
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("ttl_hours", &self.ttl_hours)
            .finish()
    }
}

/// A freshly signed token and the moment it stops being accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: Timestamp,
}

/// HS256 token service.
#[derive(Clone)]
pub struct JwtTokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl JwtTokenService {
    #[must_use]
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn claims_for(&self, user: &UserRecord, now: Timestamp) -> Result<Claims, TokenError> {
        let ttl_seconds = i64::try_from(self.config.ttl_hours)
            .ok()
            .and_then(|hours| hours.checked_mul(SECONDS_PER_HOUR))
            .ok_or_else(|| TokenError::Signing("token lifetime is too long".to_string()))?;

        let iat = now.as_second();

        Ok(Claims {
            sub: user.uuid.into_uuid(),
            is_admin: user.is_admin,
            iat,
            exp: iat.saturating_add(ttl_seconds),
            iss: self.config.issuer.clone(),
        })
    }

    fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user: &UserRecord) -> Result<IssuedToken, TokenError> {
        let claims = self.claims_for(user, Timestamp::now())?;

        let expires_at = Timestamp::from_second(claims.exp)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok(IssuedToken {
            token: self.sign(&claims)?,
            expires_at,
        })
    }

    fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;

        Ok(data.claims)
    }
}

/// Issues and verifies the bearer tokens presented to the HTTP API.
#[automock]
pub trait TokenService: Send + Sync {
    /// Sign a token for the given user, carrying their admin flag.
    fn issue(&self, user: &UserRecord) -> Result<IssuedToken, TokenError>;

    /// Check a token's signature, issuer and expiry, returning its claims.
    fn verify(&self, token: &str) -> Result<Claims, TokenError>;
}
