//! Listening socket establishment.

use std::net::Ipv4Addr;

use thiserror::Error;
use tokio::net::TcpListener;

/// Error type for listener establishment.
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("failed to bind {addr:?}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// Bind the listening socket for the configured listen address.
///
/// A `host:port` string is bound exactly as given (hostnames are resolved);
/// a bare port binds the unspecified address so the proxy fronts every
/// interface, matching plain listening-socket semantics.
pub async fn bind(listen_address: &str) -> Result<TcpListener, ListenerError> {
    let result = match listen_address.parse::<u16>() {
        Ok(port) => TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)).await,
        Err(_) => TcpListener::bind(listen_address).await,
    };

    let listener = result.map_err(|source| ListenerError::Bind {
        addr: listen_address.to_string(),
        source,
    })?;

    if let Ok(local_addr) = listener.local_addr() {
        tracing::debug!(address = %local_addr, "Listener bound");
    }

    Ok(listener)
}
