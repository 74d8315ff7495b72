//! Source models: where an index ingests documents from.

use std::collections::BTreeMap;

use quickwit_config::constants::DEFAULT_CONFIG_VERSION;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::serde_helpers::{is_default, null_as_default, string_from_number_or_string};

/// A source attached to an index, as listed in [`Index`](crate::models::Index).
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Source {
    #[serde(rename = "source_id")]
    pub id: String,
    #[serde(deserialize_with = "string_from_number_or_string")]
    pub version: String,
    pub num_pipelines: u32,
    pub enabled: bool,
    pub source_type: String,
    pub input_format: String,
}

/// Desired source definition, sent on create and echoed back by the service.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    #[serde(deserialize_with = "string_from_number_or_string")]
    pub version: String,
    #[serde(rename = "source_id")]
    pub id: String,
    pub source_type: String,
    #[serde(skip_serializing_if = "is_default")]
    pub num_pipelines: u32,
    /// Type-specific parameters.
    #[serde(deserialize_with = "null_as_default")]
    pub params: BTreeMap<String, Value>,
}

impl SourceConfig {
    /// A single-pipeline Pulsar source reading `topic` from the broker at
    /// `address`.
    ///
    /// The token is sent as `authentication.token` and left out entirely
    /// when empty.
    pub fn pulsar(
        source_id: impl Into<String>,
        address: impl Into<String>,
        token: &str,
        topic: impl Into<String>,
    ) -> Self {
        let mut params = BTreeMap::new();
        params.insert("address".to_string(), Value::String(address.into()));
        params.insert("topics".to_string(), json!([topic.into()]));
        params.insert("consumer_name".to_string(), json!("quickwit"));
        if !token.is_empty() {
            params.insert("authentication".to_string(), json!({ "token": token }));
        }

        Self {
            version: DEFAULT_CONFIG_VERSION.to_string(),
            id: source_id.into(),
            source_type: "pulsar".to_string(),
            num_pipelines: 1,
            params,
        }
    }
}
