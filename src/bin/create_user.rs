// src/bin/create_user.rs
//! Register a user from the command line and print the bearer token.
//!
//! Usage: `create_user <username>`
use anyhow::{Context, Result, bail};
use shelf_core::application::{
    commands::users::{RegisterUserCommand, UserCommandService},
    ports::{security::TokenIssuer, time::Clock},
};
use shelf_core::config::AppConfig;
use shelf_core::domain::user::UserRepository;
use shelf_core::infrastructure::{
    database, repositories::PostgresUserRepository, security::token::Sha256TokenIssuer,
    time::SystemClock,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let Some(username) = std::env::args().nth(1) else {
        bail!("usage: create_user <username>");
    };

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url(), 1)
        .await
        .context("connecting to database")?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool));
    let token_issuer: Arc<dyn TokenIssuer> = Arc::new(Sha256TokenIssuer);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let commands = UserCommandService::new(user_repo, token_issuer, clock);

    let registered = commands
        .register(RegisterUserCommand { username })
        .await
        .context("registering user")?;

    println!("user {} ({})", registered.user.username, registered.user.id);
    println!("token: {}", registered.token);
    Ok(())
}
