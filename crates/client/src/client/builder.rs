//! Client builder for constructing [`QuickwitClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing and validating the endpoint (absolute `http`/`https` URL,
//!   no trailing slashes)
//! - Registering authentication and custom interceptors in call order
//! - Refusing to build when a credential cannot be sent as a header
//! - Configuring the default HTTP transport (timeout, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`QuickwitClient`] methods)
//! - Reading config files (handled by `quickwit_config::ConfigLoader`)
//!
//! # Invariants
//! - Scalar options (endpoint, logger, transport, timeout, TLS verification)
//!   are last-wins; interceptor options append.
//! - `timeout` and `skip_verify` only configure the default transport; they
//!   are ignored with a warning when a custom transport is injected.
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::sync::Arc;
use std::time::Duration;

use quickwit_config::Config;
use quickwit_config::constants::{DEFAULT_ENDPOINT, DEFAULT_MAX_REDIRECTS};
use reqwest::Url;
use secrecy::SecretString;
use tracing::Dispatch;

use crate::client::QuickwitClient;
use crate::error::{ClientError, Result};
use crate::interceptor::Interceptor;
use crate::transport::Transport;

/// Builder for creating a new [`QuickwitClient`].
///
/// Every option has a default, so `QuickwitClient::builder().build()` yields
/// an anonymous client for `http://localhost:7280`.
///
/// # Example
///
/// ```rust,ignore
/// use quickwit_client::QuickwitClient;
/// use secrecy::SecretString;
///
/// let client = QuickwitClient::builder()
///     .endpoint("https://quickwit.example.com")
///     .basic_auth("admin", SecretString::new("s3cret".to_string().into()))
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct QuickwitClientBuilder {
    endpoint: String,
    interceptors: Vec<Interceptor>,
    transport: Option<Arc<dyn Transport>>,
    dispatch: Option<Dispatch>,
    timeout: Option<Duration>,
    skip_verify: bool,
    credential_error: Option<ClientError>,
}

impl Default for QuickwitClientBuilder {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            interceptors: Vec::new(),
            transport: None,
            dispatch: None,
            timeout: None,
            skip_verify: false,
            credential_error: None,
        }
    }
}

impl QuickwitClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Quickwit REST API, e.g. `http://localhost:7280`.
    ///
    /// Trailing slashes are removed.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Send `Authorization: Bearer <token>` on every request.
    ///
    /// An empty token registers nothing. A token that is not a valid header
    /// value makes [`build`](Self::build) fail.
    pub fn bearer_token(mut self, token: SecretString) -> Self {
        match Interceptor::bearer_token(token) {
            Ok(Some(interceptor)) => self.interceptors.push(interceptor),
            Ok(None) => {}
            Err(e) => self.reject_credential(e),
        }
        self
    }

    /// Send HTTP basic credentials on every request.
    pub fn basic_auth(mut self, username: &str, password: SecretString) -> Self {
        match Interceptor::basic_auth(username, password) {
            Ok(interceptor) => self.interceptors.push(interceptor),
            Err(e) => self.reject_credential(e),
        }
        self
    }

    fn reject_credential(&mut self, error: ClientError) {
        self.credential_error.get_or_insert(error);
    }

    /// Register a custom interceptor, run after those registered before it.
    pub fn interceptor(mut self, interceptor: Interceptor) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Route this client's log events to `dispatch` instead of the global
    /// subscriber.
    pub fn logger(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    /// Replace the default HTTP transport.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Set the request timeout of the default transport.
    ///
    /// Unset by default: requests wait until the service answers.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Apply a configuration record.
    ///
    /// Equivalent to calling `endpoint`, `bearer_token`, `basic_auth`,
    /// `timeout` and `skip_verify` in that order with the record's values,
    /// so options called afterwards still win.
    pub fn from_config(mut self, config: &Config) -> Self {
        self = self.endpoint(config.connection.endpoint.clone());
        if let Some(token) = &config.auth.bearer_token {
            self = self.bearer_token(token.clone());
        }
        if let Some(basic) = &config.auth.basic {
            self = self.basic_auth(&basic.username, basic.password.clone());
        }
        if let Some(timeout) = config.connection.timeout {
            self = self.timeout(timeout);
        }
        self.skip_verify(config.connection.skip_verify)
    }

    /// Normalize an endpoint by removing trailing slashes.
    ///
    /// - `"http://localhost:7280/"` -> `"http://localhost:7280"`
    /// - `"https://qw.example.com//"` -> `"https://qw.example.com"`
    fn normalize_endpoint(endpoint: &str) -> String {
        endpoint.trim_end_matches('/').to_string()
    }

    fn validate_endpoint(endpoint: &str) -> Result<()> {
        let url = Url::parse(endpoint)
            .map_err(|e| ClientError::InvalidUrl(format!("Invalid endpoint '{}': {}", endpoint, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "Invalid endpoint '{}': unsupported scheme '{}'",
                endpoint,
                url.scheme()
            )));
        }
        Ok(())
    }

    /// Build the [`QuickwitClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidCredential`] if a bearer token or basic
    /// credential could not be turned into a header.
    /// Returns [`ClientError::InvalidUrl`] if the endpoint is not an absolute
    /// `http`/`https` URL.
    /// Returns `ClientError::HttpError` if the default HTTP client fails to build.
    pub fn build(self) -> Result<QuickwitClient> {
        if let Some(error) = self.credential_error {
            return Err(error);
        }
        let endpoint = Self::normalize_endpoint(&self.endpoint);
        Self::validate_endpoint(&endpoint)?;

        let transport = match self.transport {
            Some(transport) => {
                if self.timeout.is_some() || self.skip_verify {
                    tracing::warn!(
                        "timeout and skip_verify only configure the default transport and are ignored with a custom transport"
                    );
                }
                transport
            }
            None => Arc::new(Self::default_http(&endpoint, self.timeout, self.skip_verify)?),
        };

        Ok(QuickwitClient {
            transport,
            endpoint,
            interceptors: self.interceptors,
            dispatch: self.dispatch,
        })
    }

    fn default_http(
        endpoint: &str,
        timeout: Option<Duration>,
        skip_verify: bool,
    ) -> Result<reqwest::Client> {
        let mut http_builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if let Some(timeout) = timeout {
            http_builder = http_builder.timeout(timeout);
        }

        if skip_verify {
            if endpoint.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        Ok(http_builder.build()?)
    }
}
