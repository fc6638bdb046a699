//! App Context

use std::sync::Arc;

use sqlx::{PgPool, migrate::MigrateError};
use thiserror::Error;

use crate::{
    auth::{JwtTokenService, TokenConfig, TokenService},
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] MigrateError),
}

/// Database settings used to build an [`AppContext`].
#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub users: Arc<dyn UsersService>,
    pub tokens: Arc<dyn TokenService>,
}

impl AppContext {
    /// Build application context, connecting to the configured database.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or applying migrations fails.
    pub async fn connect(
        database: &DatabaseOptions,
        tokens: TokenConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(&database.url, database.max_connections)
            .await
            .map_err(AppInitError::Database)?;

        if database.run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrate)?;
        }

        Ok(Self::from_pool(pool, tokens))
    }

    /// Build application context over an existing pool.
    #[must_use]
    pub fn from_pool(pool: PgPool, tokens: TokenConfig) -> Self {
        let db = Db::new(pool);

        Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            users: Arc::new(PgUsersService::new(db)),
            tokens: Arc::new(JwtTokenService::new(tokens)),
        }
    }
}
