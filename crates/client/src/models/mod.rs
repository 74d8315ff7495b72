//! Data models for Quickwit API requests and responses.
//!
//! Types mirror the JSON documents of the REST API and are organized by
//! resource in submodules, re-exported here for convenient access.
//!
//! Response models decode leniently: absent fields take their default value
//! and unknown fields are ignored. Only [`IndexConfig`] and [`SourceConfig`]
//! are ever sent to the service.

pub mod cluster;
pub mod common;
pub mod doc_mapping;
pub mod index_config;
pub mod indexes;
pub mod search;
pub mod settings;
pub mod sources;
pub mod splits;

pub use cluster::{
    ChitchatId, ChitchatStateSnapshot, Cluster, NodeState, NodeStateSnapshot, VersionedValue,
};
pub use common::ErrorMessage;
pub use doc_mapping::{DocMapping, FieldMapping};
pub use index_config::{IndexConfig, IndexRetention};
pub use indexes::{Describe, Index, IndexCheckpoint};
pub use search::SearchResponse;
pub use settings::{IndexingSettings, MergePolicy, Resources, SearchSettings};
pub use sources::{Source, SourceConfig};
pub use splits::{FooterOffsets, Maturity, Split, SplitsResponse, TimeRange};
