use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SHOWCASE_LOG";

/// Installs the stderr subscriber.
///
/// The filter comes from `SHOWCASE_LOG` (e.g. `showcase=debug`). Without it, only warnings are
/// shown, or debug output when `verbose` is set.
pub(super) fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
