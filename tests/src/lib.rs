//! Records shared by the integration tests.

pub mod models;

/// Routes `tracing` output through the test harness.
///
/// Set `RUST_LOG=recast=trace` to see plan resolution and copy events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
