use crate::args::LogLevel;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so stdout stays a clean report. RUST_LOG, when
/// set, overrides `--log-level`.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    // Already installed when `run` is called more than once in-process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
