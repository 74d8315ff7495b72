//! Pluggable HTTP transport.
//!
//! The client never talks to the network directly: every prepared request
//! goes through a [`Transport`]. [`reqwest::Client`] is the default
//! implementation; tests and callers with special needs (proxies, recorded
//! traffic) can inject their own.

use std::fmt;

use futures::future::BoxFuture;
use reqwest::{Request, Response};

use crate::error::Result;

/// Sends one fully prepared request and returns the raw response.
///
/// Implementations must not inspect the status code: classification is done
/// by the caller.
pub trait Transport: Send + Sync + fmt::Debug {
    fn send(&self, request: Request) -> BoxFuture<'_, Result<Response>>;
}

impl Transport for reqwest::Client {
    fn send(&self, request: Request) -> BoxFuture<'_, Result<Response>> {
        Box::pin(async move { Ok(self.execute(request).await?) })
    }
}
