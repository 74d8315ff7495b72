//! Indexing and search settings embedded in an index config.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{is_default, null_as_default};

/// Indexing settings of an index.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct IndexingSettings {
    #[serde(skip_serializing_if = "is_default")]
    pub commit_timeout_secs: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub docstore_compression_level: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub docstore_blocksize: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub split_num_docs_target: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_policy: Option<MergePolicy>,
    #[serde(deserialize_with = "null_as_default")]
    pub resources: Resources,
}

/// Merge policy of an index.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MergePolicy {
    /// `stable_log`, `limit_merge` or `no_merge`.
    #[serde(rename = "type")]
    pub policy_type: String,
    #[serde(skip_serializing_if = "is_default")]
    pub min_level_num_docs: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub merge_factor: u32,
    #[serde(skip_serializing_if = "is_default")]
    pub max_merge_factor: u32,
    /// Human-readable duration, e.g. `48h`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maturation_period: Option<String>,
}

/// Indexer resource limits.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Resources {
    /// Heap size per indexing pipeline, e.g. `2GB`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heap_size: Option<String>,
}

/// Search settings of an index.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchSettings {
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub default_search_fields: Vec<String>,
}
