//! Notes Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - handlers: HTTP handlers, wired up in routes

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;

mod config;
mod domain;
mod error;
mod handlers;
mod repository;
mod routes;
mod state;


pub use config::ServerConfig;
pub use domain::Note;
pub use error::{Result, ServerError};
pub use routes::create_router;
pub use state::AppState;

/// Entry point: logging, configuration from the environment, then serve.
pub async fn run() -> Result<()> {
    init_tracing();
    let config = ServerConfig::from_env()?;
    run_server(config).await
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Serve until Ctrl+C or SIGTERM.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    let state = Arc::new(AppState::new(config)?);
    tracing::info!(dist_dir = %state.config.dist_dir.display(), "Serving UI bundle");

    let router = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| ServerError::Server(format!("Failed to bind to {addr}: {e}")))?;

    tracing::info!(%addr, "Starting http server");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Server(format!("Server error: {e}")))?;

    tracing::info!("Http server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received terminate signal, shutting down"),
    }
}
