//! Shared helpers for integration tests.

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a test-writer subscriber once, so `RUST_LOG`-style output from
/// the engine shows up under `cargo test -- --nocapture`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}
