//! Index models returned by the index lifecycle endpoints.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::index_config::IndexConfig;
use crate::models::sources::Source;
use crate::serde_helpers::{null_as_default, string_from_number_or_string, unix_seconds_or_epoch};

/// Per-source ingestion checkpoint. The shape depends on the source type.
pub type IndexCheckpoint = BTreeMap<String, serde_json::Value>;

/// Index metadata as stored in the metastore.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Index {
    #[serde(deserialize_with = "string_from_number_or_string")]
    pub version: String,
    /// `<index_id>:<ulid>`.
    pub index_uid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub index_config: IndexConfig,
    #[serde(deserialize_with = "null_as_default")]
    pub checkpoint: IndexCheckpoint,
    /// Sent by the service as unix seconds. `null` decodes as the epoch.
    #[serde(
        serialize_with = "chrono::serde::ts_seconds::serialize",
        deserialize_with = "unix_seconds_or_epoch"
    )]
    pub create_timestamp: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub sources: Vec<Source>,
}

impl Index {
    /// The index id, taken from the embedded config.
    pub fn id(&self) -> &str {
        &self.index_config.id
    }
}

/// Summary statistics of an index.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Describe {
    pub index_id: String,
    pub index_uri: String,
    pub num_published_splits: u64,
    pub size_published_splits: u64,
    pub num_published_docs: u64,
    pub size_published_docs_uncompressed: u64,
    pub timestamp_field_name: Option<String>,
    /// Unset when the index has no timestamp field or no documents.
    pub min_timestamp: Option<i64>,
    pub max_timestamp: Option<i64>,
}
