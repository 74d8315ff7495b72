//! Main Quickwit REST API client and API methods.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `indexes`: Index lifecycle and introspection methods
//! - `sources`: Source lifecycle methods
//! - `search`: Search method
//! - `cluster`: Cluster information methods
//!
//! # What this module does NOT handle:
//! - Building request URLs and bodies (delegated to [`crate::endpoints`])
//! - Status classification and decoding (delegated to [`crate::endpoints::request`])
//!
//! # Invariants
//! - Every request passes through the interceptors in registration order
//!   before it reaches the transport.
//! - When a logger dispatch is configured, the whole call (send, classify,
//!   decode) runs with it as the default subscriber.

pub mod builder;

mod cluster;
mod indexes;
mod search;
mod sources;

use std::future::Future;
use std::sync::Arc;

use reqwest::Request;
use tracing::Dispatch;
use tracing::instrument::WithSubscriber;

use crate::interceptor::Interceptor;
use crate::transport::Transport;

/// Quickwit REST API client.
///
/// Cheap to clone: clones share the transport and interceptors. Every call
/// is independent; the client holds no per-request state.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use quickwit_client::QuickwitClient;
/// use secrecy::SecretString;
///
/// let client = QuickwitClient::builder()
///     .endpoint("https://quickwit.example.com")
///     .bearer_token(SecretString::new("my-token".to_string().into()))
///     .build()?;
/// let indexes = client.list_indexes().await?;
/// ```
#[derive(Debug, Clone)]
pub struct QuickwitClient {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) endpoint: String,
    pub(crate) interceptors: Vec<Interceptor>,
    pub(crate) dispatch: Option<Dispatch>,
}

impl QuickwitClient {
    /// Create a new client builder.
    pub fn builder() -> builder::QuickwitClientBuilder {
        builder::QuickwitClientBuilder::new()
    }

    /// Base URL of the Quickwit REST API, without trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn prepare(&self, mut request: Request) -> Request {
        for interceptor in &self.interceptors {
            interceptor.apply(&mut request);
        }
        request
    }

    async fn run<F: Future>(&self, fut: F) -> F::Output {
        match &self.dispatch {
            Some(dispatch) => fut.with_subscriber(dispatch.clone()).await,
            None => fut.await,
        }
    }
}
