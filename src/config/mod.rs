//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI arguments (args.rs)           settings file (loader.rs)
//!     └── both positional values        └── used when no positionals
//!             │                                 │
//!             └────────► resolver.rs ◄──────────┘
//!                             │
//!                     ProxyConfig (validated, immutable)
//!                             │
//!                     shared with the serve loop for the process lifetime
//! ```
//!
//! # Design Decisions
//! - Exactly one source is used per run; settings-file mode is selected
//!   automatically when no positional values are supplied
//! - Config is immutable once resolved; there is no reload
//! - Validation failures are fatal before any socket is opened

pub mod args;
pub mod loader;
pub mod resolver;
pub mod schema;

pub use resolver::ConfigError;
pub use schema::ProxyConfig;
