use clap::{Parser, Subcommand};

mod admin;
mod db;
mod token;

#[derive(Debug, Parser)]
#[command(name = "shopfront-app", about = "Shopfront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Admin(admin::AdminCommand),
    Token(token::TokenCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Admin(command) => admin::run(command).await,
            Commands::Token(command) => token::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}

/// Connection settings shared by every subcommand that touches the database.
#[derive(Debug, clap::Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    pub(crate) async fn connect(&self) -> Result<shopfront_app::database::Db, String> {
        let pool = shopfront_app::database::connect(&self.database_url, 1)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))?;

        Ok(shopfront_app::database::Db::new(pool))
    }
}
