//! Common types shared across Quickwit API models.
//!
//! This module contains the error envelope the service returns on non-2xx
//! responses. It does NOT contain resource-specific models.

use serde::Deserialize;

/// Error body returned by Quickwit on failed requests.
///
/// Either field may be absent depending on which layer produced the error.
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorMessage {
    /// `message` followed by `error`, without a separator.
    pub fn text(&self) -> String {
        format!(
            "{}{}",
            self.message.as_deref().unwrap_or_default(),
            self.error.as_deref().unwrap_or_default()
        )
    }
}
