//! Logging infrastructure for the glint CLI.
//!
//! Structured logging through the `tracing` ecosystem. Library code in
//! `glint-core` logs with plain `tracing` macros; this module decides what
//! reaches the terminal.
//!
//! # Example
//!
//! ```rust,no_run
//! use glint_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!(port = 3000, "server starting");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "glint=debug,glint_core=debug,glint_cli=debug";
const QUIET_FILTER: &str = "glint=error,glint_core=error,glint_cli=error";
const DEFAULT_FILTER: &str = "glint=info,glint_core=info,glint_cli=info";

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program, before any logging occurs.
///
/// # Verbosity Levels
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for glint crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for glint crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize logger with custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
