//! Logging setup
//!
//! Diagnostics go to stderr through `tracing` so they never mix with the
//! credentials and instructions printed on stdout. `RUST_LOG` takes precedence
//! over the `--verbose` flag.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "awsutil=debug,warn" } else { "warn" }
}

/// Install the global subscriber; later calls are ignored
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
