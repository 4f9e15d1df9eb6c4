// src/logging.rs
// =============================================================================
// Logging setup.
//
// All diagnostics go to stderr through `tracing`, so stdout only carries the
// report (table or JSON). RUST_LOG overrides the default filter.
// =============================================================================

use tracing_subscriber::EnvFilter;

// Initializes the global tracing subscriber.
//
// Parameters:
//   verbose: when true, our own crate logs at debug level instead of info
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,readme_mirror=debug"
    } else {
        "warn,readme_mirror=info"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // try_init so a second call (tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
