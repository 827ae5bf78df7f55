//! Serve loop and per-connection dispatch.
//!
//! # Responsibilities
//! - Build the Axum router that funnels every request into the forwarder
//! - Own the listening socket for the life of the `Listening` state
//! - Print the startup banner naming backend target and listen address
//! - Leave the accept loop on shutdown and report how it ended

use std::future::IntoFuture;
use std::net::SocketAddr;

use axum::body::Body;
use axum::routing::any;
use axum::Router;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ProxyConfig;
use crate::lifecycle::Shutdown;
use crate::proxy::forwarder::forward;

/// State shared with every connection handler. `target` never changes for
/// the life of the process.
#[derive(Clone)]
pub struct AppState {
    /// Outbound HTTP client; connection management is its concern.
    pub client: Client<HttpConnector, Body>,
    /// The one backend everything is forwarded to.
    pub target: SocketAddr,
    /// Shutdown coordinator, reachable from handlers for the fatal case.
    pub shutdown: Shutdown,
}

/// How the serve loop ended when it did not end by signal.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("listener I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unclassified forwarding failure: {0}")]
    Fatal(String),
}

/// The proxy server: router plus the shutdown coordination around the
/// accept loop.
pub struct ProxyServer {
    router: Router,
    target: SocketAddr,
    shutdown: Shutdown,
}

impl ProxyServer {
    /// Assemble the server for the given configuration.
    pub fn new(config: &ProxyConfig, shutdown: Shutdown) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        let target = config.target();

        let state = AppState {
            client,
            target,
            shutdown: shutdown.clone(),
        };

        let router = Router::new()
            .route("/", any(forward))
            .route("/{*path}", any(forward))
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        Self {
            router,
            target,
            shutdown,
        }
    }

    /// Run the accept loop on the given listener until shutdown.
    ///
    /// Returns `Ok` for a signal-driven exit. Dropping the serve future
    /// closes the listening socket; in-flight connections are not awaited.
    pub async fn run(self, listener: TcpListener) -> Result<(), ServeError> {
        let listen_addr = listener.local_addr()?;
        let backend = format!("http://{}", self.target);
        tracing::info!(
            backend = %backend,
            listen = %listen_addr,
            "Reverse proxy started"
        );

        let mut shutdown_rx = self.shutdown.subscribe();
        let serve = axum::serve(listener, self.router.into_make_service()).into_future();

        tokio::select! {
            result = serve => result?,
            _ = shutdown_rx.recv() => {
                tracing::info!("Stopped accepting connections");
            }
        }

        match self.shutdown.fatal_cause() {
            Some(cause) => Err(ServeError::Fatal(cause.to_string())),
            None => Ok(()),
        }
    }
}
