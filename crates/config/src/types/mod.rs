//! Configuration type definitions for the Quickwit client.
//!
//! Responsibilities:
//! - Define configuration types for the connection and authentication.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Reading configuration files (see `loader` module).
//! - Actual network connections or header injection (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization helpers (`secret_string`, `opt_duration_seconds`) are private modules.

mod auth;
pub(crate) mod connection;

pub use auth::{AuthConfig, BasicAuth};
pub use connection::{Config, ConnectionConfig};
