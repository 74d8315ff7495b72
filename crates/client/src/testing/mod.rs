//! Testing utilities for Quickwit client tests.
//!
//! This module provides a fixture loader and [`CannedTransport`], an
//! in-memory [`Transport`] that answers every request with a fixed response
//! and records what it was sent.
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use quickwit_client::QuickwitClient;
//! use quickwit_client::testing::{CannedTransport, load_fixture};
//!
//! let transport = CannedTransport::new(200, load_fixture("indexes/list_indexes.json").to_string());
//! let client = QuickwitClient::builder().transport(transport.clone()).build()?;
//! client.list_indexes().await?;
//! assert_eq!(transport.releases(), 1);
//! ```

use std::io;
use std::path::Path;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::Stream;
use futures::future::BoxFuture;
use reqwest::header::HeaderMap;
use reqwest::{Method, Request, Response};

use crate::error::{ClientError, Result};
use crate::transport::Transport;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "indexes/list_indexes.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// A request as seen by [`CannedTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Transport that answers every request with the same status and body.
///
/// Clones share their request log and release counter, so a test can keep
/// one handle and give another to the client.
#[derive(Debug, Clone)]
pub struct CannedTransport {
    status: u16,
    body: Bytes,
    unreadable_body: bool,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    releases: Arc<AtomicUsize>,
}

impl CannedTransport {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
            unreadable_body: false,
            requests: Arc::default(),
            releases: Arc::default(),
        }
    }

    /// Answer with `status` and a body whose read fails midway.
    pub fn with_unreadable_body(status: u16) -> Self {
        Self {
            unreadable_body: true,
            ..Self::new(status, Bytes::new())
        }
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// How many response bodies have been released (read to completion or
    /// dropped).
    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

impl Transport for CannedTransport {
    fn send(&self, request: Request) -> BoxFuture<'_, Result<Response>> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedRequest {
                method: request.method().clone(),
                url: request.url().to_string(),
                headers: request.headers().clone(),
                body: request.body().and_then(|b| b.as_bytes()).map(<[u8]>::to_vec),
            });

        let chunk = if self.unreadable_body {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"))
        } else {
            Ok(self.body.clone())
        };
        let body = reqwest::Body::wrap_stream(TrackedBody {
            chunk: Some(chunk),
            releases: Arc::clone(&self.releases),
        });
        let response = http::Response::builder()
            .status(self.status)
            .body(body)
            .map(Response::from)
            .map_err(|e| ClientError::InvalidResponse(format!("invalid canned response: {}", e)));

        Box::pin(async move { response })
    }
}

/// Single-chunk body stream that counts its own drop.
struct TrackedBody {
    chunk: Option<io::Result<Bytes>>,
    releases: Arc<AtomicUsize>,
}

impl Stream for TrackedBody {
    type Item = io::Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.get_mut().chunk.take())
    }
}

impl Drop for TrackedBody {
    fn drop(&mut self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}
