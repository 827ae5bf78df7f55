//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Resolve config → Bind listener → Register signal watcher → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal or fatal error → Stop accepting → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger graceful shutdown (identical behavior)
//! ```
//!
//! # Design Decisions
//! - One shutdown subscription registered at startup; triggering is
//!   idempotent because some environments deliver more than one signal
//! - In-flight connections are not awaited on exit; shutdown is
//!   best-effort, not a drain of in-flight transfers
//! - A fatal cause recorded on the coordinator turns the exit non-zero

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
