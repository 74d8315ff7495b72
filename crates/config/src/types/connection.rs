//! Connection configuration types for the Quickwit client.
//!
//! Responsibilities:
//! - Define connection settings (endpoint, TLS verification, timeout).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from files (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Duration fields are serialized as seconds (integers).
//! - `Config::default()` targets `http://localhost:7280` with no credentials.

use crate::constants::DEFAULT_ENDPOINT;
use crate::types::auth::{AuthConfig, BasicAuth};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing an optional Duration as seconds (integer).
mod opt_duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.map(|d| d.as_secs()).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Connection configuration for a Quickwit node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the Quickwit REST API (e.g., http://localhost:7280)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    #[serde(default)]
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds). `None` waits indefinitely.
    #[serde(
        default,
        with = "opt_duration_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout: Option<Duration>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            skip_verify: false,
            timeout: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    #[serde(default)]
    pub connection: ConnectionConfig,
    /// Authentication settings
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config for the given endpoint with no credentials.
    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            connection: ConnectionConfig {
                endpoint,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig::default(),
        }
    }

    /// Create a config that authenticates with a bearer token.
    pub fn with_bearer_token(endpoint: String, token: SecretString) -> Self {
        let mut config = Self::with_endpoint(endpoint);
        config.auth.bearer_token = Some(token);
        config
    }

    /// Create a config that authenticates with basic credentials.
    pub fn with_basic_auth(endpoint: String, username: String, password: SecretString) -> Self {
        let mut config = Self::with_endpoint(endpoint);
        config.auth.basic = Some(BasicAuth { username, password });
        config
    }
}
