//! Command-line interface definition for glint.
//!
//! glint has no subcommands: every flag tunes the one server it runs. Flags
//! sit at the top of the configuration chain, above `glint.config.json` and
//! the environment (see [`crate::config`]).

mod validation;

use clap::Parser;
use std::path::PathBuf;

pub use validation::{parse_debounce_ms, parse_port};

/// glint - static file dev server with live reload
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "glint",
    version,
    about = "Static file dev server with live reload",
    long_about = "glint serves a directory over HTTP and reloads connected browsers\n\
                  whenever a file under the watched directory changes. Browsers are\n\
                  notified over a Server-Sent Events stream at /sse."
)]
pub struct Cli {
    /// Port to listen on [default: 3000]
    #[arg(short, long, value_parser = parse_port)]
    pub port: Option<u16>,

    /// Address to bind [default: 127.0.0.1]
    #[arg(long)]
    pub host: Option<String>,

    /// Directory to watch for changes
    ///
    /// Without it the server only serves files and never sends reloads.
    #[arg(short, long, value_name = "DIR")]
    pub watch: Option<PathBuf>,

    /// Directory to serve files from [default: .]
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Index document served at `/`, relative to the root [default: index.html]
    #[arg(long, value_name = "FILE")]
    pub index: Option<PathBuf>,

    /// Quiet period in milliseconds before a batch of changes triggers a reload [default: 100]
    #[arg(long, value_name = "MS", value_parser = parse_debounce_ms)]
    pub debounce_ms: Option<u64>,

    /// Path to a config file (defaults to ./glint.config.json when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
