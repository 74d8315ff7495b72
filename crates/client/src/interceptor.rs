//! Request interceptors.
//!
//! Responsibilities:
//! - Define [`Interceptor`], a request-mutating step run on every outgoing
//!   request after it is built and before it is sent.
//! - Provide the built-in `Authorization` interceptors (bearer token and
//!   HTTP basic).
//!
//! Does NOT handle:
//! - Ordering. The client applies interceptors in registration order.
//! - Failure. Interceptors cannot fail; a credential that cannot be turned
//!   into a header value is rejected with
//!   [`ClientError::InvalidCredential`] when the interceptor is created.
//!
//! Invariants:
//! - Built-in interceptors append to `Authorization`, never replace it, so
//!   registering bearer then basic yields two headers, bearer first.
//! - Credential header values are marked sensitive so they are redacted from
//!   `Debug` output.

use std::fmt;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Request;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::{ClientError, Result};

type InterceptFn = dyn Fn(&mut Request) + Send + Sync;

/// A request-mutating step applied to every outgoing request.
#[derive(Clone)]
pub struct Interceptor(Arc<InterceptFn>);

impl Interceptor {
    /// Wrap an arbitrary function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Request) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// `Authorization: Bearer <token>`.
    ///
    /// Returns `Ok(None)` for an empty token, which means "no
    /// authentication", and an error for a token that is not a valid header
    /// value (control characters, non-visible bytes).
    pub fn bearer_token(token: SecretString) -> Result<Option<Self>> {
        let token = token.expose_secret();
        if token.is_empty() {
            return Ok(None);
        }
        let value = sensitive_header("bearer token", &format!("Bearer {}", token))?;
        Ok(Some(Self::append_authorization(value)))
    }

    /// `Authorization: Basic base64(<username>:<password>)`.
    pub fn basic_auth(username: &str, password: SecretString) -> Result<Self> {
        let credentials = STANDARD.encode(format!("{}:{}", username, password.expose_secret()));
        let value = sensitive_header("basic credentials", &format!("Basic {}", credentials))?;
        Ok(Self::append_authorization(value))
    }

    fn append_authorization(value: HeaderValue) -> Self {
        Self::new(move |request| {
            request.headers_mut().append(AUTHORIZATION, value.clone());
        })
    }

    pub(crate) fn apply(&self, request: &mut Request) {
        (self.0)(request)
    }
}

impl fmt::Debug for Interceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Interceptor(..)")
    }
}

fn sensitive_header(kind: &str, value: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(value).map_err(|_| {
        ClientError::InvalidCredential(format!("{} is not a valid header value", kind))
    })?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{Method, Url};

    fn request() -> Request {
        Request::new(
            Method::GET,
            Url::parse("http://localhost:7280/api/v1/indexes").unwrap(),
        )
    }

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_bearer_token_header() {
        let mut req = request();
        Interceptor::bearer_token(secret("abc"))
            .unwrap()
            .unwrap()
            .apply(&mut req);
        assert_eq!(req.headers()[AUTHORIZATION], "Bearer abc");
        assert!(req.headers()[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn test_empty_bearer_token_is_not_registered() {
        assert!(Interceptor::bearer_token(secret("")).unwrap().is_none());
    }

    #[test]
    fn test_basic_auth_header() {
        let mut req = request();
        Interceptor::basic_auth("user", secret("pass"))
            .unwrap()
            .apply(&mut req);
        // base64("user:pass")
        assert_eq!(req.headers()[AUTHORIZATION], "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_interceptors_append() {
        let mut req = request();
        Interceptor::bearer_token(secret("abc"))
            .unwrap()
            .unwrap()
            .apply(&mut req);
        Interceptor::basic_auth("user", secret("pass"))
            .unwrap()
            .apply(&mut req);

        let values: Vec<_> = req.headers().get_all(AUTHORIZATION).iter().collect();
        assert_eq!(values, vec!["Bearer abc", "Basic dXNlcjpwYXNz"]);
    }

    #[test]
    fn test_invalid_header_value_rejected() {
        let err = Interceptor::bearer_token(secret("bad\ntoken")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidCredential(_)));
        assert!(!err.to_string().contains("bad"));
    }

    #[test]
    fn test_custom_interceptor() {
        let mut req = request();
        Interceptor::new(|r| {
            r.headers_mut()
                .insert("x-tenant", HeaderValue::from_static("acme"));
        })
        .apply(&mut req);
        assert_eq!(req.headers()["x-tenant"], "acme");
    }

    #[test]
    fn test_debug_hides_closure() {
        let interceptor = Interceptor::bearer_token(secret("abc")).unwrap().unwrap();
        assert!(!format!("{:?}", interceptor).contains("abc"));
    }
}
