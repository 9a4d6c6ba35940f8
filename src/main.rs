use anyhow::Result;
use shelf_core::application::{
    ports::{security::TokenIssuer, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use shelf_core::config::AppConfig;
use shelf_core::domain::{
    book::{BookReadRepository, BookWriteRepository},
    category::CategoryRepository,
    favorite::FavoriteRepository,
    user::UserRepository,
};
use shelf_core::infrastructure::{
    database,
    repositories::{
        PostgresBookReadRepository, PostgresBookWriteRepository, PostgresCategoryRepository,
        PostgresFavoriteRepository, PostgresUserRepository,
    },
    security::token::Sha256TokenIssuer,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use shelf_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let book_write_repo: Arc<dyn BookWriteRepository> =
        Arc::new(PostgresBookWriteRepository::new(pool.clone()));
    let book_read_repo: Arc<dyn BookReadRepository> =
        Arc::new(PostgresBookReadRepository::new(pool.clone()));
    let favorite_repo: Arc<dyn FavoriteRepository> =
        Arc::new(PostgresFavoriteRepository::new(pool.clone()));

    let token_issuer: Arc<dyn TokenIssuer> = Arc::new(Sha256TokenIssuer);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        category_repo,
        book_write_repo,
        book_read_repo,
        favorite_repo,
        token_issuer,
        clock,
        slugger,
        config.slug_insert_attempts(),
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        slug_insert_attempts = config.slug_insert_attempts(),
        "listening on {address}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
