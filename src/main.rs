//! Server binary: loads config, opens the pool (unless `STORAGE=memory`), serves until Ctrl-C.

use car_sales_api::{app, AppState, ServerConfig, StorageBackend};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("car_sales_api=info,tower_http=info")),
        )
        .init();

    let state = match config.storage {
        StorageBackend::Postgres => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            AppState::postgres(pool, config.error_mode)
        }
        StorageBackend::Memory => {
            tracing::warn!("STORAGE=memory: data is lost on restart");
            AppState::in_memory(config.error_mode)
        }
    };

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(error_mode = ?config.error_mode, "listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state, config.body_limit_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
