//! Authentication types for Quickwit client configuration.
//!
//! Responsibilities:
//! - Describe which credentials the client should attach to outgoing requests.
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - Building the `Authorization` headers (see the client crate's interceptors).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Bearer token and basic credentials may both be set; the client registers
//!   the bearer token first.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Same as `secret_string`, for optional secrets.
mod opt_secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret
            .as_ref()
            .map(|s| s.expose_secret())
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| SecretString::new(s.into())))
    }
}

/// Username/password pair sent as an HTTP basic `Authorization` header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicAuth {
    pub username: String,
    #[serde(with = "secret_string")]
    pub password: SecretString,
}

/// Authentication configuration.
///
/// Both fields are optional; a Quickwit node without an auth proxy in front
/// of it needs neither.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Token sent as `Authorization: Bearer <token>`.
    #[serde(
        default,
        with = "opt_secret_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub bearer_token: Option<SecretString>,
    /// Credentials sent as `Authorization: Basic ...`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic: Option<BasicAuth>,
}

impl AuthConfig {
    /// Returns true if no credentials are configured.
    ///
    /// An empty bearer token counts as unset, matching the client which
    /// skips the header in that case.
    pub fn is_anonymous(&self) -> bool {
        let has_token = self
            .bearer_token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().is_empty());
        !has_token && self.basic.is_none()
    }
}
