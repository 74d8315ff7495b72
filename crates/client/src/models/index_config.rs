//! Index config: the desired definition of an index, sent on create.

use std::time::Duration;

use quickwit_config::constants::DEFAULT_CONFIG_VERSION;
use serde::{Deserialize, Serialize};

use crate::models::doc_mapping::DocMapping;
use crate::models::settings::{IndexingSettings, SearchSettings};

/// Desired index definition.
///
/// Build one with [`IndexConfig::new`] and the `with_*` helpers, or parse the
/// YAML format Quickwit's own index config files use with
/// [`IndexConfig::from_yaml`].
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct IndexConfig {
    #[serde(deserialize_with = "crate::serde_helpers::string_from_number_or_string")]
    pub version: String,
    #[serde(rename = "index_id")]
    pub id: String,
    #[serde(rename = "index_uri", skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub doc_mapping: DocMapping,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub indexing_settings: IndexingSettings,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub search_settings: SearchSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention: Option<IndexRetention>,
}

/// Retention policy of an index.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct IndexRetention {
    /// Duration after which splits are dropped, in human-readable form
    /// (`1 day`, `2 hours`, `90 seconds`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    /// How often the policy is applied: a cron expression (`0 0 * * * *`) or
    /// `hourly`, `daily`, `weekly`, `monthly`, `yearly`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
}

impl IndexConfig {
    /// A config for `id` at the current config version, with dynamic mapping
    /// and default settings.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            version: DEFAULT_CONFIG_VERSION.to_string(),
            id: id.into(),
            doc_mapping: DocMapping {
                mode: "dynamic".to_string(),
                ..DocMapping::default()
            },
            ..Self::default()
        }
    }

    /// Parse an index config document in YAML (or JSON, which is valid YAML).
    ///
    /// An unquoted `version` is read as a number; write `version: "0.10"`
    /// rather than `version: 0.10` to keep the trailing zero.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Store the index in the S3 bucket `bucket_name` (`s3://<bucket_name>`).
    pub fn with_bucket(mut self, bucket_name: &str) -> Self {
        self.uri = Some(format!("s3://{}", bucket_name));
        self
    }

    /// Drop splits older than `period`.
    ///
    /// The period is written in whole seconds (rounded to the nearest second)
    /// as `"<seconds> seconds"` with six decimals, e.g. `"90.000000 seconds"`.
    /// Creates the retention block if the config has none.
    pub fn with_retention(mut self, period: Duration) -> Self {
        let retention = self.retention.get_or_insert_with(IndexRetention::default);
        retention.period = Some(format!("{:.6} seconds", period.as_secs_f64().round()));
        self
    }
}
