//! Single-backend reverse proxy library.
//!
//! Accepts inbound connections on a configured listen address and forwards
//! every request unmodified to one fixed backend on the local loopback
//! interface, relaying the response back to the client. Backend failures are
//! classified into distinct client-visible responses instead of surfacing
//! raw transport errors.

// Core subsystems
pub mod config;
pub mod net;
pub mod proxy;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ProxyConfig;
pub use lifecycle::Shutdown;
pub use proxy::{ProxyServer, ServeError};
