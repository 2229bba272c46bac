use vu_server::error::{Result as ServerErrorResult, ServerError};
use vu_server::{AppState, build_router, logger};

use vu_config::Config;
use vu_db::Database;

use std::net::SocketAddr;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // Secrets may come from a .env file during development
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir).map_err(|e| {
            ServerError::io(format!("Failed to create log dir {}", log_dir.display()), e)
        })?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(&config.logging, log_file_path.as_deref())?;

    info!("Starting vu-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the mapping store
    let database_path = config.database_path()?;
    info!("Opening database: {}", database_path.display());
    let database = Database::open(&database_path, config.database.max_connections).await?;

    database.migrate().await?;
    database.ping().await?;
    info!("Database ready");

    // Build providers, gates, resolver and engine
    let app_state = AppState::from_config(&config, database.clone())?;
    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ServerError::io(format!("Failed to bind {bind_addr}"), e))?;
    let local_addr = listener
        .local_addr()
        .map_err(|e| ServerError::io("Failed to read listener address", e))?;
    info!("Server listening on {}", local_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| ServerError::io("Server error", e))?;

    database.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Keep serving rather than shutting down immediately
            std::future::pending::<()>().await;
        }
    }
}
