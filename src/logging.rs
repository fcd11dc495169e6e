use tracing_subscriber::EnvFilter;

/// Initialise logging on stderr, keeping stdout free for the menu. The
/// default level is `info`; `-v` switches to `debug` and lets `RUST_LOG`
/// override the filter.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        // Force `info` so a stray RUST_LOG in the environment does not make
        // the output noisy.
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
