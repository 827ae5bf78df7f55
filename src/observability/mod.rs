//! Observability subsystem.
//!
//! Structured logging only; the proxy deliberately exposes no metrics
//! endpoint. Console output is part of the external contract: a startup
//! banner and one log line per classified forwarding error.

pub mod logging;
