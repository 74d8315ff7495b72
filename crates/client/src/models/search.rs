//! Search response model.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// Result of a search request. Hits are returned as raw documents.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub hits: Vec<serde_json::Value>,
    pub num_hits: u64,
    pub elapsed_time_micros: u64,
}

impl SearchResponse {
    /// Decode every hit into `T`.
    pub fn hits_as<T: serde::de::DeserializeOwned>(&self) -> Result<Vec<T>, serde_json::Error> {
        self.hits
            .iter()
            .cloned()
            .map(serde_json::from_value)
            .collect()
    }
}
