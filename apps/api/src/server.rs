// Process bootstrap: tracing, database pool, migrations, and the HTTP listener

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::api::{coffee_router, trivia_router, CoffeeState, TriviaState};
use crate::auth::JwtVerifier;
use crate::config::Config;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Installs the global tracing subscriber
///
/// `RUST_LOG` wins over the configured `LOG_LEVEL`.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "cafe_trivia_api={level},tower_http={level}",
            level = config.log_level
        ))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Opens the connection pool
pub async fn connect(config: &Config) -> Result<PgPool, ServerError> {
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    tracing::info!("Database connected successfully");

    Ok(pool)
}

/// Runs the trivia API until shutdown
pub async fn run_trivia(config: Config) -> Result<(), ServerError> {
    init_tracing(&config);
    let pool = connect(&config).await?;

    if config.run_migrations {
        let mut migrator = sqlx::migrate!("./migrations/trivia");
        migrator.set_ignore_missing(true);
        migrator.run(&pool).await?;
        tracing::info!("Trivia migrations applied");
    }

    let app = trivia_router(TriviaState::postgres(pool));
    serve(app, config.socket_addr()).await
}

/// Runs the coffee shop API until shutdown
pub async fn run_coffee_shop(config: Config) -> Result<(), ServerError> {
    init_tracing(&config);
    if config.uses_dev_secret() {
        tracing::warn!("JWT_SECRET not set, using development secret");
    }
    let pool = connect(&config).await?;

    if config.run_migrations {
        let mut migrator = sqlx::migrate!("./migrations/coffee");
        migrator.set_ignore_missing(true);
        migrator.run(&pool).await?;
        tracing::info!("Coffee shop migrations applied");
    }

    let verifier = JwtVerifier::new(
        &config.jwt_secret,
        config.jwt_audience.as_deref(),
        config.jwt_issuer.as_deref(),
    );
    let app = coffee_router(CoffeeState::postgres(pool, Arc::new(verifier)));
    serve(app, config.socket_addr()).await
}

async fn serve(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
