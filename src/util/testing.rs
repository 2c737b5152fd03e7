//! Tracing bootstrap for tests.

use std::sync::Once;

use tracing::info;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Installs a global fmt subscriber for test runs, once per process.
///
/// Honors `RUST_LOG`; defaults to `debug` so store operation spans show up
/// when a test fails.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let result = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .try_init();
        if let Err(e) = result {
            // Another test binary in the same process already installed one
            eprintln!("logging setup skipped: {}", e);
        }
        info!("Test Setup complete");
    });
}
