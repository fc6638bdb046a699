use clap::Args;
use shopfront_app::{
    auth::{DEFAULT_TOKEN_ISSUER, DEFAULT_TOKEN_TTL_HOURS, JwtTokenService, TokenConfig, TokenService},
    domain::users::{PgUsersService, UsersService},
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct IssueTokenArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "SHOPFRONT_PASSWORD", hide_env_values = true)]
    password: String,

    /// Shared secret used to sign tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    jwt_secret: String,

    #[arg(long, env = "JWT_ISSUER", default_value = DEFAULT_TOKEN_ISSUER)]
    jwt_issuer: String,

    #[arg(long, env = "JWT_TTL_HOURS", default_value_t = DEFAULT_TOKEN_TTL_HOURS)]
    jwt_ttl_hours: u64,
}

pub(crate) async fn run(args: IssueTokenArgs) -> Result<(), String> {
    if args.jwt_secret.trim().is_empty() {
        return Err("jwt-secret cannot be empty".to_string());
    }

    let users = PgUsersService::new(args.database.connect().await?);

    let user = users
        .authenticate(&args.email, &args.password)
        .await
        .map_err(|error| format!("failed to authenticate: {error}"))?;

    let tokens = JwtTokenService::new(
        TokenConfig::new(args.jwt_secret)
            .with_issuer(args.jwt_issuer)
            .with_ttl_hours(args.jwt_ttl_hours),
    );

    let issued = tokens
        .issue(&user)
        .map_err(|error| format!("failed to sign token: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("is_admin: {}", user.is_admin);
    println!("token_expires_at: {}", issued.expires_at);
    println!("access_token: {}", issued.token);

    Ok(())
}
