//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Quickwit client. All integration tests should use
//! these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Log output is only installed when `QUICKWIT_TEST_LOG=true`
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use std::sync::Once;

use quickwit_config::constants::TEST_LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

// Re-export test utilities from quickwit-client
#[allow(unused_imports)]
pub use quickwit_client::testing::{CannedTransport, load_fixture};

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use quickwit_client::{ClientError, QuickwitClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

static INIT_LOGGING: Once = Once::new();

/// Install a global fmt subscriber when `QUICKWIT_TEST_LOG=true`.
///
/// The filter comes from `RUST_LOG` and defaults to `quickwit_client=debug`.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        if std::env::var(TEST_LOG_ENV_VAR).is_ok_and(|v| v == "true") {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("quickwit_client=debug"));
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_test_writer()
                .try_init();
        }
    });
}

/// Client pointed at the mock server, with no credentials.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> QuickwitClient {
    init_test_logging();
    QuickwitClient::builder()
        .endpoint(server.uri())
        .build()
        .expect("client should build")
}

/// Client that sends everything to `transport`.
#[allow(dead_code)]
pub fn client_with(transport: &CannedTransport) -> QuickwitClient {
    init_test_logging();
    QuickwitClient::builder()
        .transport(transport.clone())
        .build()
        .expect("client should build")
}
