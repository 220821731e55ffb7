mod concurrency;
mod host_data;

/// Installs a test-writer subscriber so `RUST_LOG=cci.cache=trace` shows store logs.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
