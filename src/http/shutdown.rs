//! Graceful shutdown on SIGTERM and SIGINT.
//!
//! Orchestrators send SIGTERM before killing a pod; draining in-flight
//! connections within the grace period keeps rolling deploys quiet.

use std::time::Duration;

use axum_server::Handle;

/// Listen for SIGTERM/SIGINT and trigger a graceful shutdown.
///
/// When a signal arrives the server stops accepting new connections and
/// waits up to `grace` for existing ones to complete.
pub fn spawn_signal_listener(handle: Handle, grace: Duration) {
    tokio::spawn(async move {
        wait_for_signal().await;
        tracing::info!(
            grace_secs = grace.as_secs(),
            "Graceful shutdown initiated, draining connections"
        );
        handle.graceful_shutdown(Some(grace));
    });
}

async fn wait_for_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
