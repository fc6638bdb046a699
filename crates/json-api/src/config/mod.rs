//! Server configuration module

use clap::Parser;
use shopfront_app::{auth::TokenConfig, context::DatabaseOptions};

use crate::config::{
    auth::AuthConfig,
    db::DatabaseConfig,
    logging::LoggingConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod logging;
pub(crate) mod server;

/// Shopfront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "shopfront-json", about = "Shopfront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Access token settings.
    #[command(flatten)]
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Database settings for the application context.
    #[must_use]
    pub fn database_options(&self) -> DatabaseOptions {
        DatabaseOptions {
            url: self.database.database_url.clone(),
            max_connections: self.database.database_max_connections,
            run_migrations: self.database.database_run_migrations,
        }
    }

    /// Token signing settings for the application context.
    #[must_use]
    pub fn token_config(&self) -> TokenConfig {
        TokenConfig::new(self.auth.jwt_secret.clone())
            .with_issuer(self.auth.jwt_issuer.clone())
            .with_ttl_hours(self.auth.jwt_ttl_hours)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::{logging::LogFormat, *};

    const REQUIRED: [&str; 5] = [
        "shopfront-json",
        "--database-url",
        "postgres://localhost/shopfront",
        "--jwt-secret",
        "not-a-real-secret",
    ];

    #[test]
    fn defaults_apply_when_only_required_values_are_given() -> TestResult {
        let config = ServerConfig::try_parse_from(REQUIRED)?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert_eq!(config.database.database_max_connections, 10);
        assert!(!config.database.database_run_migrations);
        assert_eq!(config.auth.jwt_issuer, "shopfront");
        assert_eq!(config.auth.jwt_ttl_hours, 24);
        assert_eq!(config.logging.slow_request_threshold_ms, 1_000);
        assert_eq!(config.logging.log_format, LogFormat::Compact);

        Ok(())
    }

    #[test]
    fn token_config_carries_auth_settings() -> TestResult {
        let config = ServerConfig::try_parse_from(
            REQUIRED
                .into_iter()
                .chain(["--jwt-issuer", "shop", "--jwt-ttl-hours", "2"]),
        )?;

        let tokens = config.token_config();

        assert_eq!(tokens.secret, "not-a-real-secret");
        assert_eq!(tokens.issuer, "shop");
        assert_eq!(tokens.ttl_hours, 2);

        Ok(())
    }

    #[test]
    fn database_options_carry_pool_settings() -> TestResult {
        let config = ServerConfig::try_parse_from(REQUIRED.into_iter().chain([
            "--database-max-connections",
            "3",
            "--database-run-migrations",
        ]))?;

        let options = config.database_options();

        assert_eq!(options.url, "postgres://localhost/shopfront");
        assert_eq!(options.max_connections, 3);
        assert!(options.run_migrations);

        Ok(())
    }
}
