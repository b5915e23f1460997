use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use common::database::{DatabaseConfig, close_pool, health_check, init_lazy_pool};
use inventory::{AppState, bootstrap, config::ServerConfig, routes};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting inventory service");

    let server_config = ServerConfig::from_env();

    // Connects lazily; an unreachable database yields 500s, not a startup failure
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_lazy_pool(&db_config)?;

    match health_check(&pool).await {
        Ok(_) => info!("Database connection successful"),
        Err(e) => warn!("Starting without a database connection: {}", e),
    }

    // Requests are only accepted once the bootstrap has run
    let outcome = bootstrap::run(&pool).await;
    info!("Schema bootstrap finished: {:?}", outcome);

    let app = routes::create_router(AppState::new(pool.clone()), &server_config.static_dir);

    let addr = server_config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down inventory service");
    close_pool(pool).await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
