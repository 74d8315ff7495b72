//! Error types for the Quickwit client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Quickwit client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Invalid endpoint or request URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A credential cannot be sent as an HTTP header value. The message never
    /// contains the credential itself.
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    /// Transport failure (connection, TLS, timeout, cancelled body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx response, with the message extracted from the error body.
    ///
    /// `message` is the concatenation of the body's `message` and `error`
    /// fields, or the raw body text when the body is not such an envelope.
    #[error("quickwit error: {status} - {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Non-2xx response from a list endpoint. The body is not inspected.
    #[error("quickwit error: {status}")]
    StatusError { status: u16, url: String },

    /// The response body did not match the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// The request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl ClientError {
    /// HTTP status of a remote API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } | Self::StatusError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the service answered with a 4xx status.
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Check if the service answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this error came from a request that exceeded its timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::HttpError(e) if e.is_timeout())
    }
}
