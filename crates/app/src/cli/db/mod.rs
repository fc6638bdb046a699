use clap::{Args, Subcommand};
use shopfront_app::database;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Apply pending schema migrations
    Migrate(DatabaseArgs),
}

pub(crate) async fn run(command: DbCommand) -> Result<(), String> {
    match command.command {
        DbSubcommand::Migrate(args) => migrate(args).await,
    }
}

async fn migrate(args: DatabaseArgs) -> Result<(), String> {
    let db = args.connect().await?;

    database::migrate(db.pool())
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    println!("migrations applied");

    Ok(())
}
