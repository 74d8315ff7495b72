//! Quickwit REST API client.
//!
//! This crate provides a typed client for the administrative and search
//! REST API of a Quickwit cluster: index and source lifecycle, search, and
//! cluster/describe/splits introspection.
//!
//! The client owns no state beyond its configuration. Each call builds a
//! request, runs it through the registered [`Interceptor`]s, sends it via a
//! [`Transport`] and decodes the JSON response, surfacing non-2xx statuses
//! as [`ClientError`].

pub mod client;
pub mod endpoints;
pub mod error;
mod interceptor;
pub mod models;
mod serde_helpers;
mod transport;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::QuickwitClient;
pub use client::builder::QuickwitClientBuilder;
pub use error::{ClientError, Result};
pub use interceptor::Interceptor;
pub use models::{
    Cluster, Describe, DocMapping, FieldMapping, Index, IndexConfig, IndexRetention,
    IndexingSettings, SearchResponse, SearchSettings, Source, SourceConfig, Split,
    SplitsResponse,
};
pub use transport::Transport;
