//! Process entry point for the reverse proxy.
//!
//! Startup order: logging first, then configuration resolution, then the
//! listening socket, then signal handling, then the serve loop. Any failure
//! before the serve loop is fatal and exits non-zero; a misconfigured proxy
//! must not start.

use std::process::ExitCode;

use clap::Parser;

use frontgate::config::args::StartupArgs;
use frontgate::config::resolver;
use frontgate::lifecycle::{signals, Shutdown};
use frontgate::net::listener;
use frontgate::observability::logging;
use frontgate::proxy::ProxyServer;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let args = StartupArgs::parse();

    let config = match resolver::resolve_startup(&args) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Invalid startup configuration");
            return ExitCode::FAILURE;
        }
    };

    let listener = match listener::bind(&config.listen_address).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    let shutdown = Shutdown::new();
    tokio::spawn(signals::watch(shutdown.clone()));

    let server = ProxyServer::new(&config, shutdown);
    match server.run(listener).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Proxy terminated");
            ExitCode::FAILURE
        }
    }
}
