//! Proxy engine subsystem.
//!
//! # Data Flow
//! ```text
//! Accepted connection
//!     → server.rs (router, per-connection dispatch)
//!     → forwarder.rs (outbound request to the backend, byte relay)
//!     → failure.rs (classify transport errors)
//!     → classified client response, or process shutdown for the
//!       unrecognized case
//! ```

pub mod failure;
pub mod forwarder;
pub mod server;

pub use failure::FailureClass;
pub use server::{ProxyServer, ServeError};
