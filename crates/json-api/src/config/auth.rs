//! Auth Config

use clap::Args;
use shopfront_app::auth::{DEFAULT_TOKEN_ISSUER, DEFAULT_TOKEN_TTL_HOURS};

/// Access token settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Shared secret used to sign and verify access tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Token issuer, written on issue and checked on verification
    #[arg(long, env = "JWT_ISSUER", default_value = DEFAULT_TOKEN_ISSUER)]
    pub jwt_issuer: String,

    /// Token lifetime in hours
    #[arg(long, env = "JWT_TTL_HOURS", default_value_t = DEFAULT_TOKEN_TTL_HOURS)]
    pub jwt_ttl_hours: u64,
}
