//! Command-line startup arguments.

use std::path::PathBuf;

use clap::Parser;

/// Startup arguments for the proxy.
///
/// Either both positional values are given, or neither and the settings
/// file is consulted instead. Supplying only one of the pair is a usage
/// error.
#[derive(Debug, Parser)]
#[command(name = "frontgate", about = "Single-backend reverse proxy", version)]
pub struct StartupArgs {
    /// Address to listen on: "host:port" or a bare port.
    #[arg(requires = "target_port")]
    pub listen_address: Option<String>,

    /// Loopback port of the backend process to forward to.
    pub target_port: Option<String>,

    /// Settings file used when no positional values are given.
    #[arg(long, default_value = "settings.toml")]
    pub settings: PathBuf,
}
