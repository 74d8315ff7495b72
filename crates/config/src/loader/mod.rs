//! Configuration loader for config files and explicit overrides.
//!
//! Responsibilities:
//! - Read a YAML or JSON config file into [`Config`].
//! - Provide a builder-pattern `ConfigLoader` that layers explicit overrides
//!   on top of the file.
//! - Validate the merged result before handing it to the client.
//!
//! Does NOT handle:
//! - Environment variables. The client is configured only through files and
//!   code.
//! - Building the HTTP client (see the client crate's builder).
//!
//! Invariants / Assumptions:
//! - Explicit overrides take precedence over file values, which take
//!   precedence over defaults.
//! - Files ending in `.json` are parsed as JSON; everything else as YAML.

mod error;

pub use error::ConfigError;

use secrecy::SecretString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::constants::MAX_TIMEOUT_SECS;
use crate::types::{BasicAuth, Config};

/// Parse a YAML config document.
pub fn parse_yaml(content: &str) -> Result<Config, ConfigError> {
    parse_yaml_from(content, "<yaml>")
}

/// Parse a JSON config document.
pub fn parse_json(content: &str) -> Result<Config, ConfigError> {
    parse_json_from(content, "<json>")
}

fn parse_yaml_from(content: &str, origin: &str) -> Result<Config, ConfigError> {
    serde_yaml::from_str(content).map_err(|e| ConfigError::from_yaml(&e, origin))
}

fn parse_json_from(content: &str, origin: &str) -> Result<Config, ConfigError> {
    serde_json::from_str(content).map_err(|e| ConfigError::from_json(&e, origin))
}

/// Read a config file, choosing the format from its extension.
pub fn read_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let origin = path.display().to_string();

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_json_from(&content, &origin)
    } else {
        parse_yaml_from(&content, &origin)
    }
}

/// Validate a configuration.
///
/// The endpoint must be an absolute `http`/`https` URL and the timeout, when
/// set, must be non-zero and at most [`MAX_TIMEOUT_SECS`].
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let endpoint = &config.connection.endpoint;
    let url = Url::parse(endpoint).map_err(|e| ConfigError::InvalidEndpoint {
        endpoint: endpoint.clone(),
        message: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEndpoint {
            endpoint: endpoint.clone(),
            message: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    if let Some(timeout) = config.connection.timeout {
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than zero".to_string(),
            });
        }
        if timeout.as_secs() > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout of {}s exceeds the maximum of {}s",
                    timeout.as_secs(),
                    MAX_TIMEOUT_SECS
                ),
            });
        }
    }

    Ok(())
}

/// Configuration loader that builds config from an optional file plus overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    endpoint: Option<String>,
    bearer_token: Option<SecretString>,
    basic: Option<BasicAuth>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the base configuration from this file.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Override the endpoint.
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Override the bearer token.
    pub fn with_bearer_token(mut self, token: SecretString) -> Self {
        self.bearer_token = Some(token);
        self
    }

    /// Override the basic-auth credentials.
    pub fn with_basic_auth(mut self, username: String, password: SecretString) -> Self {
        self.basic = Some(BasicAuth { username, password });
        self
    }

    /// Override TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or if the
    /// merged configuration fails [`validate`].
    pub fn build(self) -> Result<Config, ConfigError> {
        let mut config = match &self.config_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading Quickwit client config file");
                read_config_file(path)?
            }
            None => Config::default(),
        };

        if let Some(endpoint) = self.endpoint {
            config.connection.endpoint = endpoint;
        }
        if let Some(token) = self.bearer_token {
            config.auth.bearer_token = Some(token);
        }
        if let Some(basic) = self.basic {
            config.auth.basic = Some(basic);
        }
        if let Some(skip) = self.skip_verify {
            config.connection.skip_verify = skip;
        }
        if let Some(timeout) = self.timeout {
            config.connection.timeout = Some(timeout);
        }

        validate(&config)?;
        Ok(config)
    }
}
