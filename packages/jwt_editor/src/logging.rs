//! Tracing bootstrap
//!
//! Filter with `RUST_LOG`, e.g. `RUST_LOG=cryypt_jwt_editor=debug` for one line per
//! edit, or `cryypt_jwt_editor::key=trace` to see every resolver probe.

use std::sync::Once;
use tracing::info;
use tracing_subscriber::EnvFilter;

static INIT_LOGGER: Once = Once::new();

fn filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install a global subscriber (call once at application startup)
///
/// Later calls, and calls after another subscriber was installed, do nothing.
pub fn init() {
    INIT_LOGGER.call_once(|| {
        if tracing_subscriber::fmt()
            .with_env_filter(filter("info"))
            .try_init()
            .is_ok()
        {
            info!("token editor logging initialized");
        }
    });
}

/// Install a subscriber that writes through the test harness
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter("warn"))
        .with_test_writer()
        .try_init();
}
