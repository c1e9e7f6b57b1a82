//! # Logging
//!
//! Installs a stderr `fmt` subscriber so diagnostics never mix with command output.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Initializes tracing. `--verbose` overrides `RUST_LOG`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(default_filter(true))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(false)))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}
