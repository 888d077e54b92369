//! HTTP server initialization and runtime setup.
//!
//! Handles database pool construction, migrations, and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::PgUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (lazy)
/// - Migrations, when the database is reachable
/// - Axum HTTP server with graceful shutdown
///
/// A database that is down at startup is logged, not fatal: the pool is
/// constructed lazily and the process keeps serving, with store-backed
/// requests failing until the database comes back.
///
/// # Errors
///
/// Returns an error if:
/// - The database URL cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_lazy(&config.database_url)?;

    match pool.acquire().await {
        Ok(_) => {
            tracing::info!("Connected to database");

            if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
                tracing::error!("Failed to migrate: {e}");
            }
        }
        Err(e) => tracing::error!("Failed to connect to database: {e}"),
    }

    let urls = Arc::new(PgUrlRepository::new(Arc::new(pool)));
    let state = AppState::new(urls);

    let app = app_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Completes when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {e}");
    } else {
        tracing::info!("Shutdown signal received");
    }
}
