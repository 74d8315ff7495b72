//! Document mapping models: the field schema of an index.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{is_default, is_false, null_as_default};

/// Field schema of an index.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DocMapping {
    #[serde(deserialize_with = "null_as_default")]
    pub field_mappings: Vec<FieldMapping>,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tag_fields: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "is_false")]
    pub store_source: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub index_field_presence: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_field: Option<String>,
    /// `dynamic`, `strict` or `lenient`.
    pub mode: String,
    #[serde(skip_serializing_if = "is_default")]
    pub max_num_partitions: u32,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tokenizers: Vec<serde_json::Value>,
}

/// A single field of the doc mapping.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FieldMapping {
    pub name: String,
    /// `text`, `i64`, `u64`, `f64`, `bool`, `datetime`, `ip`, `bytes`, `json`, `object`...
    #[serde(rename = "type")]
    pub field_type: String,
    /// Either a bool or a `{normalizer: ...}` object depending on the field type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast_precision: Option<String>,
    pub indexed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_format: Option<String>,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub input_formats: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    pub stored: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub fieldnorms: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokenizer: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub coerce: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub expand_dots: bool,
}

impl FieldMapping {
    /// An indexed and stored field of the given type.
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            indexed: true,
            stored: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_field_mapping_serialization() {
        let field = FieldMapping::new("message", "text");
        let value = serde_json::to_value(&field).unwrap();

        assert_eq!(
            value,
            json!({"name": "message", "type": "text", "indexed": true, "stored": true})
        );
    }

    #[test]
    fn test_unindexed_field_still_emits_flags() {
        let field = FieldMapping {
            name: "raw".to_string(),
            field_type: "bytes".to_string(),
            ..FieldMapping::default()
        };
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["indexed"], false);
        assert_eq!(value["stored"], false);
    }

    #[test]
    fn test_doc_mapping_omits_empty_optionals() {
        let mapping = DocMapping {
            mode: "dynamic".to_string(),
            field_mappings: vec![FieldMapping::new("body", "text")],
            ..DocMapping::default()
        };
        let value = serde_json::to_value(&mapping).unwrap();
        let obj = value.as_object().unwrap();

        assert!(obj.contains_key("field_mappings"));
        assert!(obj.contains_key("mode"));
        for key in [
            "tag_fields",
            "store_source",
            "index_field_presence",
            "timestamp_field",
            "max_num_partitions",
            "tokenizers",
        ] {
            assert!(!obj.contains_key(key), "{} should be omitted", key);
        }
    }

    #[test]
    fn test_decodes_service_doc_mapping() {
        let value = json!({
            "doc_mapping_uid": "01JKTRV3MF0000000000000000",
            "mode": "dynamic",
            "dynamic_mapping": {"indexed": true, "stored": true},
            "field_mappings": [
                {"name": "timestamp", "type": "datetime", "fast": true, "fast_precision": "seconds",
                 "indexed": true, "stored": true, "input_formats": ["rfc3339", "unix_timestamp"],
                 "output_format": "rfc3339"},
                {"name": "message", "type": "text", "indexed": true, "stored": true,
                 "tokenizer": "default", "record": "position", "fieldnorms": false, "fast": false}
            ],
            "timestamp_field": "timestamp",
            "tag_fields": [],
            "max_num_partitions": 200,
            "index_field_presence": false,
            "store_document_size": false,
            "store_source": false,
            "tokenizers": null
        });

        let mapping: DocMapping = serde_json::from_value(value).unwrap();

        assert_eq!(mapping.field_mappings.len(), 2);
        assert_eq!(mapping.field_mappings[0].field_type, "datetime");
        assert_eq!(mapping.field_mappings[0].fast, Some(json!(true)));
        assert_eq!(
            mapping.field_mappings[0].input_formats,
            vec!["rfc3339", "unix_timestamp"]
        );
        assert_eq!(mapping.field_mappings[1].tokenizer.as_deref(), Some("default"));
        assert_eq!(mapping.timestamp_field.as_deref(), Some("timestamp"));
        assert_eq!(mapping.max_num_partitions, 200);
        assert!(mapping.tokenizers.is_empty());
    }
}
