use tracing_subscriber::EnvFilter;

/// Installs the JSON log formatter used by every trigger.
///
/// Level comes from `RUST_LOG` and defaults to `info`. Timestamps are left to
/// CloudWatch.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(false)
        .with_current_span(false)
        .without_time()
        .init();
}
