// HADES Backend API entry point
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hades_backend_core::{
    app_config::{AppConfig, DEFAULT_LOG_FILTER},
    build_router,
    db::{create_diesel_pool, mask_connection_string, DieselDatabaseConfig},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Configuration comes first so RUST_LOG drives the filter
    let config = AppConfig::from_env();
    let rust_log = config
        .as_ref()
        .map(|config| config.rust_log.as_str())
        .unwrap_or(DEFAULT_LOG_FILTER);

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(rust_log)
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!(
        "Starting HADES Backend API on {} ({})",
        config.bind_address, config.environment
    );

    // Initialize database pool
    info!(
        "Initializing database pool for {}",
        mask_connection_string(&config.database.url)
    );
    let diesel_pool = match create_diesel_pool(DieselDatabaseConfig::from(&config.database)).await
    {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to initialize database pool: {}", e);
            anyhow::bail!("Database initialization failed: {}", e);
        },
    };

    let state = match AppState::from_config(&config).await {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to initialize analyzers: {:#}", e);
            return Err(e);
        },
    };

    let bind_address = config.bind_address.clone();
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    info!("Listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    // Close pooled connections only after in-flight requests are done
    drop(diesel_pool);
    info!("Database pool closed, shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl-C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
