//! Diagnostic output

use tracing_subscriber::EnvFilter;

/// Initialize tracing for a run.
///
/// Debug mode enables `debug` events for this crate, otherwise only
/// warnings are shown. `RUST_LOG` overrides both when set. Events go to
/// stdout without timestamps so debug output reads as plain lines.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "warn" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mdcal={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();
}
