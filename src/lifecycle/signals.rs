//! OS signal handling.

use crate::lifecycle::Shutdown;

/// Wait for an interrupt or termination signal and trigger shutdown.
///
/// Both signals produce the identical graceful transition; since the
/// trigger is idempotent, repeated deliveries are harmless.
pub async fn watch(shutdown: Shutdown) {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate =
            signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupt received");
            }
            _ = terminate.recv() => {
                tracing::info!("Termination signal received");
            }
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        tracing::info!("Interrupt received");
    }

    shutdown.trigger();
}
