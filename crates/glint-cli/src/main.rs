//! glint - static file dev server with live reload.
//!
//! Parses flags, initializes logging and colors, and runs the server.

use clap::Parser;
use glint_cli::{cli, commands, error, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    // Convert CLI errors to miette diagnostics for error reporting
    commands::serve_execute(args)
        .await
        .map_err(error::cli_error_to_miette)
}
