//! glint CLI - static file dev server with live reload.
//!
//! This crate wires `glint-core` (watcher, debouncer, broadcaster) to an
//! axum HTTP server and wraps it in a command-line interface.
//!
//! # Architecture
//!
//! - [`cli`] - clap definition of the flags
//! - [`config`] - layered configuration (file, environment, flags)
//! - [`server`] - `/sse` stream, index injection and static files
//! - [`commands`] - the serve command that ties everything together
//! - [`error`] - error types with actionable messages
//! - [`logger`] - structured logging with tracing
//! - [`ui`] - terminal status lines
//!
//! # Example
//!
//! ```rust,no_run
//! use glint_cli::{cli::Cli, commands, logger};
//! use clap::Parser;
//!
//! # async fn run() -> glint_cli::Result<()> {
//! let cli = Cli::parse();
//! logger::init_logger(cli.verbose, cli.quiet, cli.no_color);
//! commands::serve_execute(cli).await
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod server;
pub mod ui;

pub use error::{CliError, ConfigError, Result};
