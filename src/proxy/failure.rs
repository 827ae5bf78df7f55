//! Forwarding-failure classification.
//!
//! # Responsibilities
//! - Map transport errors to exactly one of three outcomes
//! - Fix the client-visible bodies for the recovered classes
//!
//! # Design Decisions
//! - The mapping is a pure, exhaustive match over `io::ErrorKind`; the
//!   default arm is the process-fatal case, so an unrecognized failure is
//!   visibly distinct from a recognized-but-rare one
//! - A backend that refuses connections is a backend problem, not a proxy
//!   problem: answer fast and keep serving in case it comes back
//! - A reset mid-transfer is common and benign; log it at info

use std::error::Error as StdError;
use std::io;

/// Fixed client-visible body when the backend refuses connections.
pub const BACKEND_UNAVAILABLE_BODY: &str = "Proxy error. Application is unavailable.";

/// Fixed client-visible body when a peer resets an in-flight connection.
pub const CONNECTION_RESET_BODY: &str = "Connection reset";

/// Classification of a single forwarding failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// The backend refused the connection; nothing is listening there.
    BackendUnreachable,
    /// Either peer dropped the connection mid-transfer.
    ConnectionReset,
    /// Anything else. Treated as fatal for the whole process.
    Unclassified,
}

impl FailureClass {
    /// Classify a transport failure by its I/O error kind.
    pub fn from_io_kind(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::ConnectionRefused => Self::BackendUnreachable,
            io::ErrorKind::ConnectionReset => Self::ConnectionReset,
            _ => Self::Unclassified,
        }
    }

    /// Classify any error by walking its source chain to the underlying
    /// transport failure. An error with no recognizable cause is itself
    /// unclassified.
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        let mut current: Option<&(dyn StdError + 'static)> = Some(err);
        while let Some(err) = current {
            if let Some(io_err) = err.downcast_ref::<io::Error>() {
                return Self::from_io_kind(io_err.kind());
            }
            // A peer that closes before the message completes carries no
            // errno but is a reset in every way that matters here.
            if let Some(hyper_err) = err.downcast_ref::<hyper::Error>() {
                if hyper_err.is_incomplete_message() {
                    return Self::ConnectionReset;
                }
            }
            current = err.source();
        }
        Self::Unclassified
    }
}
