//! Serde helpers for Quickwit's JSON shapes.
//!
//! Responsibilities:
//! - Decode `null` as the field's default so response models stay lenient.
//! - Accept config versions written either as strings (`"0.9"`) or as bare
//!   YAML/JSON numbers (`0.9`).
//! - Decode unix-second timestamps, with `null` meaning the epoch.
//! - Provide `skip_serializing_if` predicates so write-path configs omit
//!   unset fields the way the service's own config files do.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required fields).
//!
//! Invariants / assumptions:
//! - Response models rely on `#[serde(default)]` for absent fields; these
//!   helpers only cover the explicit-`null` case.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
}

/// Version field that may be a string or a bare number.
///
/// Bare numbers go through their shortest float form, so unquoted `0.10`
/// reads as `"0.1"` and `1.0` as `"1"`. Quote versions that carry trailing
/// zeros.
pub fn string_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    match value {
        None => Ok(String::new()),
        Some(StringOrNumber::String(s)) => Ok(s),
        Some(StringOrNumber::U64(v)) => Ok(v.to_string()),
        Some(StringOrNumber::I64(v)) => Ok(v.to_string()),
        Some(StringOrNumber::F64(v)) => Ok(v.to_string()),
    }
}

/// Deserialize `null` as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Unix seconds as a UTC timestamp; `null` is the epoch.
pub fn unix_seconds_or_epoch<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<i64>::deserialize(deserializer)? {
        None => Ok(DateTime::default()),
        Some(secs) => DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {}", secs))),
    }
}

/// True if the value equals its type's default (zero for numbers).
pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// True if the flag is unset.
pub fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<u32>,
    }

    #[test]
    fn test_null_as_default_with_null() {
        let w: Wrapper = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(w.items.is_empty());
    }

    #[test]
    fn test_null_as_default_with_value() {
        let w: Wrapper = serde_json::from_str(r#"{"items": [1, 2]}"#).unwrap();
        assert_eq!(w.items, vec![1, 2]);
    }

    #[test]
    fn test_null_as_default_with_missing_field() {
        let w: Wrapper = serde_json::from_str("{}").unwrap();
        assert!(w.items.is_empty());
    }

    #[derive(Debug, Deserialize)]
    struct Versioned {
        #[serde(deserialize_with = "string_from_number_or_string")]
        version: String,
    }

    #[test]
    fn test_version_from_string() {
        let v: Versioned = serde_json::from_str(r#"{"version": "0.8"}"#).unwrap();
        assert_eq!(v.version, "0.8");
    }

    #[test]
    fn test_version_from_float() {
        let v: Versioned = serde_json::from_str(r#"{"version": 0.9}"#).unwrap();
        assert_eq!(v.version, "0.9");
    }

    #[test]
    fn test_version_from_yaml_bare_number() {
        let v: Versioned = serde_yaml::from_str("version: 0.9").unwrap();
        assert_eq!(v.version, "0.9");
    }

    #[test]
    fn test_unquoted_version_loses_trailing_zero() {
        let v: Versioned = serde_yaml::from_str("version: 0.10").unwrap();
        assert_eq!(v.version, "0.1");
        let v: Versioned = serde_yaml::from_str("version: \"0.10\"").unwrap();
        assert_eq!(v.version, "0.10");
    }

    #[derive(Debug, Deserialize)]
    struct Stamped {
        #[serde(deserialize_with = "unix_seconds_or_epoch")]
        at: DateTime<Utc>,
    }

    #[test]
    fn test_unix_seconds() {
        let s: Stamped = serde_json::from_str(r#"{"at": 1739184330}"#).unwrap();
        assert_eq!(s.at.timestamp(), 1739184330);
    }

    #[test]
    fn test_unix_seconds_null_is_epoch() {
        let s: Stamped = serde_json::from_str(r#"{"at": null}"#).unwrap();
        assert_eq!(s.at.timestamp(), 0);
    }

    #[test]
    fn test_is_default() {
        assert!(is_default(&0u32));
        assert!(!is_default(&5u64));
        assert!(is_default(&String::new()));
    }

    #[test]
    fn test_is_false() {
        assert!(is_false(&false));
        assert!(!is_false(&true));
    }
}
