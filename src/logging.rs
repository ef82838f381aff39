// Logging setup for the paramx binary
// Everything goes to stderr so stdout only ever carries result lines

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
/// `RUST_LOG` wins over the level picked from the flags.
pub fn init_logger(verbose: bool, silent: bool) {
    let default_level = if silent {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // keep an already-installed subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
