//! Startup configuration resolution.
//!
//! # Responsibilities
//! - Validate the listen-address and target-port candidates
//! - Select the configuration source (CLI pair or settings file)
//! - Produce the immutable `ProxyConfig` the rest of the process runs on
//!
//! # Design Decisions
//! - Candidates are arbitrary strings; validation lives here, not in the
//!   collaborators that supply them
//! - Every error names the offending field or file
//! - No recovery path: resolution failure means the process must not start

use std::path::PathBuf;

use thiserror::Error;

use crate::config::args::StartupArgs;
use crate::config::loader;
use crate::config::schema::ProxyConfig;

/// Error raised when the proxy cannot assemble a valid startup
/// configuration. None of these are recoverable.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid listen address {0:?}")]
    InvalidListenAddress(String),

    #[error("invalid target port {0:?}")]
    InvalidTargetPort(String),

    #[error("cannot read settings file {path:?}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse settings file {path:?}: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("settings file {path:?} has no {key}")]
    MissingSetting { path: PathBuf, key: &'static str },
}

/// Validate a listen-address and target-port candidate pair into a
/// `ProxyConfig`. The resolved value carries the inputs exactly as given.
pub fn resolve(listen_candidate: &str, port_candidate: &str) -> Result<ProxyConfig, ConfigError> {
    if listen_candidate.trim().is_empty() {
        return Err(ConfigError::InvalidListenAddress(
            listen_candidate.to_string(),
        ));
    }

    let target_port = port_candidate
        .trim()
        .parse::<u16>()
        .ok()
        .filter(|port| *port != 0)
        .ok_or_else(|| ConfigError::InvalidTargetPort(port_candidate.to_string()))?;

    Ok(ProxyConfig {
        listen_address: listen_candidate.to_string(),
        target_port,
    })
}

/// Assemble the startup configuration from CLI arguments, falling back to
/// the settings file when no positional values were supplied.
pub fn resolve_startup(args: &StartupArgs) -> Result<ProxyConfig, ConfigError> {
    match (&args.listen_address, &args.target_port) {
        (Some(listen), Some(port)) => resolve(listen, port),
        _ => {
            tracing::info!(
                path = %args.settings.display(),
                "No arguments given, loading settings file"
            );
            let settings = loader::load_settings(&args.settings)?;
            let listen = settings
                .listen_address
                .ok_or_else(|| ConfigError::MissingSetting {
                    path: args.settings.clone(),
                    key: "listen_address",
                })?;
            let port = settings
                .target_port
                .ok_or_else(|| ConfigError::MissingSetting {
                    path: args.settings.clone(),
                    key: "target_port",
                })?;
            resolve(&listen, &port.candidate())
        }
    }
}
