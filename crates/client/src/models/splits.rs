//! Split models returned by the list-splits endpoint.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{null_as_default, string_from_number_or_string};

/// A page of splits.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SplitsResponse {
    pub offset: u64,
    pub size: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub splits: Vec<Split>,
}

/// Metadata of one immutable split.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Split {
    /// `Staged`, `Published` or `MarkedForDeletion`.
    pub split_state: String,
    pub update_timestamp: i64,
    pub publish_timestamp: i64,
    #[serde(deserialize_with = "string_from_number_or_string")]
    pub version: String,
    pub split_id: String,
    pub index_uid: String,
    pub partition_id: u64,
    pub source_id: String,
    pub node_id: String,
    pub num_docs: u64,
    pub uncompressed_docs_size_in_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub time_range: TimeRange,
    pub create_timestamp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub maturity: Maturity,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub footer_offsets: FooterOffsets,
    pub delete_opstamp: u64,
    pub num_merge_ops: u64,
    pub doc_mapping_uid: String,
}

/// Inclusive range of the timestamp field covered by a split.
///
/// Zero on both ends when the index has no timestamp field.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Maturity {
    /// `mature` or `immature`.
    #[serde(rename = "type")]
    pub maturity_type: String,
    /// Only set for immature splits.
    pub maturation_period_millis: u64,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct FooterOffsets {
    pub start: u64,
    pub end: u64,
}
