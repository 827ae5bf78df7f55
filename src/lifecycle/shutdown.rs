//! Shutdown coordination for the proxy.

use std::sync::{Arc, OnceLock};

use tokio::sync::broadcast;

/// Coordinator for process shutdown.
///
/// Provides a broadcast channel the serve loop subscribes to. Triggering is
/// idempotent: repeated signals or a signal racing a fatal error collapse
/// into a single transition.
#[derive(Debug, Clone)]
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
    /// Cause recorded when shutdown was forced by an unrecoverable failure.
    fatal: Arc<OnceLock<String>>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            tx,
            fatal: Arc::new(OnceLock::new()),
        }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger shutdown. Safe to call more than once.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Record an unrecoverable failure and trigger shutdown. The first
    /// recorded cause wins.
    pub fn trigger_fatal(&self, cause: String) {
        let _ = self.fatal.set(cause);
        self.trigger();
    }

    /// The fatal cause, if shutdown was forced by an unrecoverable failure.
    pub fn fatal_cause(&self) -> Option<&str> {
        self.fatal.get().map(String::as_str)
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
