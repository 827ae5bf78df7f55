//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Configured listen address
//!     → listener.rs (interpret "host:port" vs bare port, bind)
//!     → Hand the bound socket to the serve loop
//! ```
//!
//! # Design Decisions
//! - The listen address is bound exactly as given; a bare port covers
//!   every interface
//! - Binding failure is fatal; there is no retry or fallback address

pub mod listener;
