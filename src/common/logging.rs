use tracing_subscriber::EnvFilter;

/// Initialise the global subscriber. Logs go to stderr so they never mix
/// with menu output on stdout.
///
/// `RUST_LOG` wins over `default_filter`. Calling this twice is a no-op.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
