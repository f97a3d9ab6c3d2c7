//! OS signal handling.
//!
//! # Responsibilities
//! - Translate SIGTERM/SIGINT into a single "stop the server" event for the
//!   supervise fallback
//!
//! The preferred handoff path replaces the orchestrator process entirely, in
//! which case no signal ever reaches this code: the process manager signals
//! the server directly.

use tokio::signal;

/// Resolve when the process is asked to terminate (Ctrl+C, or SIGTERM on
/// Unix).
pub async fn shutdown_requested() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, stopping server");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM, stopping server");
        },
    }
}
