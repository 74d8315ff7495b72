//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//!
//! Invariants:
//! - All error variants include context for debugging (paths, positions, values).
//! - Parse errors NEVER include the offending document text, which may hold secrets.

use std::path::PathBuf;

use serde_json::error::Category;
use thiserror::Error;

const FIELD_ERRORS: [&str; 3] = ["missing field", "unknown field", "duplicate field"];
const VALUE_ERRORS: [&str; 4] = [
    "invalid type",
    "invalid value",
    "invalid length",
    "unknown variant",
];

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML/JSON or does not match the config shape.
    ///
    /// SAFETY: only the position and the kind of failure are reported (e.g.
    /// "missing field `endpoint`", "invalid type, expected u64"), never a
    /// value or line content.
    #[error("Failed to parse {format} config from {origin}: {reason} (line {line}, column {column})")]
    Parse {
        format: &'static str,
        origin: String,
        reason: String,
        line: usize,
        column: usize,
    },

    #[error("Invalid endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },
}

impl ConfigError {
    pub(crate) fn from_yaml(error: &serde_yaml::Error, origin: &str) -> Self {
        let (line, column) = error
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((0, 0));
        ConfigError::Parse {
            format: "YAML",
            origin: origin.to_string(),
            reason: reason(&error.to_string()),
            line,
            column,
        }
    }

    pub(crate) fn from_json(error: &serde_json::Error, origin: &str) -> Self {
        let message = error.to_string();
        let reason = match error.classify() {
            // Syntax messages name the token class, never its text.
            Category::Syntax | Category::Eof => strip_location(&message).to_string(),
            Category::Data | Category::Io => reason(&message),
        };
        ConfigError::Parse {
            format: "JSON",
            origin: origin.to_string(),
            reason,
            line: error.line(),
            column: error.column(),
        }
    }
}

fn strip_location(message: &str) -> &str {
    message.split(" at line ").next().unwrap_or(message)
}

/// Secret-free summary of a serde error message.
///
/// Field errors keep the field name. Value errors keep only their kind and
/// what was expected, dropping the offending value. A leading field path
/// (`connection.timeout: ...`) is kept.
fn reason(message: &str) -> String {
    let message = strip_location(message);
    let found = FIELD_ERRORS
        .iter()
        .chain(VALUE_ERRORS.iter())
        .filter_map(|p| message.find(p).map(|idx| (idx, *p)))
        .min_by_key(|(idx, _)| *idx);
    let Some((idx, kind)) = found else {
        return "syntax error".to_string();
    };
    let (path, detail) = message.split_at(idx);

    if FIELD_ERRORS.contains(&kind) {
        let field = detail.split(", expected").next().unwrap_or(detail);
        return format!("{}{}", path, field);
    }
    match detail.rsplit_once(", expected ") {
        Some((_, expected)) => format!("{}{}, expected {}", path, kind, expected),
        None => format!("{}{}", path, kind),
    }
}
