use clap::{Args, Subcommand};
use shopfront_app::domain::users::{PgUsersService, UsersService, data::NewUser};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Debug, Subcommand)]
enum AdminSubcommand {
    /// Register a new account with admin rights
    Create(CreateAdminArgs),
    /// Grant admin rights to an existing account
    Grant(GrantAdminArgs),
}

#[derive(Debug, Args)]
pub(crate) struct CreateAdminArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[arg(long)]
    email: String,

    #[arg(long)]
    username: String,

    /// Account password
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Debug, Args)]
pub(crate) struct GrantAdminArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[arg(long)]
    email: String,
}

pub(crate) async fn run(command: AdminCommand) -> Result<(), String> {
    match command.command {
        AdminSubcommand::Create(args) => create(args).await,
        AdminSubcommand::Grant(args) => grant(args).await,
    }
}

async fn create(args: CreateAdminArgs) -> Result<(), String> {
    let users = PgUsersService::new(args.database.connect().await?);

    let user = users
        .register(NewUser {
            email: args.email,
            username: args.username,
            password: args.password,
        })
        .await
        .map_err(|error| format!("failed to register user: {error}"))?;

    let admin = users
        .set_admin(user.uuid, true)
        .await
        .map_err(|error| format!("failed to grant admin: {error}"))?;

    println!("user_uuid: {}", admin.uuid);
    println!("email: {}", admin.email);
    println!("is_admin: {}", admin.is_admin);

    Ok(())
}

async fn grant(args: GrantAdminArgs) -> Result<(), String> {
    let users = PgUsersService::new(args.database.connect().await?);

    let email = args.email.trim().to_lowercase();

    let user = users
        .list_users()
        .await
        .map_err(|error| format!("failed to list users: {error}"))?
        .into_iter()
        .find(|user| user.email == email)
        .ok_or_else(|| format!("no user with email {email}"))?;

    let admin = users
        .set_admin(user.uuid, true)
        .await
        .map_err(|error| format!("failed to grant admin: {error}"))?;

    println!("user_uuid: {}", admin.uuid);
    println!("is_admin: {}", admin.is_admin);

    Ok(())
}
