//! Listener setup and shutdown signalling for the HTTP server.

use crate::{config::ServerConfig, errors::Result};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

/// Binds the configured host and port. Host names such as `localhost` are resolved.
///
/// # Errors
/// Returns an error if the host cannot be resolved or the port is unavailable.
pub async fn bind_listener(server: &ServerConfig) -> Result<TcpListener> {
    let listener = TcpListener::bind((server.host.as_str(), server.port)).await?;
    Ok(listener)
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down."),
        () = terminate => info!("Received SIGTERM, shutting down."),
    }
}
