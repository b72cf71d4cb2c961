use tracing_subscriber::EnvFilter;

/// Routes `log` records to stderr so stdout carries only the report.
/// Filter comes from `RUST_LOG`, defaulting to `warn`.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
