//! Centralized constants for the Quickwit client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default Quickwit REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:7280";

/// Default Quickwit REST port.
pub const DEFAULT_QUICKWIT_PORT: u16 = 7280;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Protocol Defaults
// =============================================================================

/// Config document version written by [`IndexConfig`] and [`SourceConfig`]
/// convenience constructors in the client crate.
///
/// [`IndexConfig`]: https://quickwit.io/docs/configuration/index-config
/// [`SourceConfig`]: https://quickwit.io/docs/configuration/source-config
pub const DEFAULT_CONFIG_VERSION: &str = "0.9";

// =============================================================================
// Testing
// =============================================================================

/// Environment variable that turns on log output in the integration-test harness.
pub const TEST_LOG_ENV_VAR: &str = "QUICKWIT_TEST_LOG";
