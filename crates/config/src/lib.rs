//! Configuration management for the Quickwit client.
//!
//! This crate provides the configuration record consumed by the client
//! builder, its defaults, and a loader for YAML/JSON config files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, parse_json, parse_yaml, read_config_file, validate};
pub use types::{AuthConfig, BasicAuth, Config, ConnectionConfig};
