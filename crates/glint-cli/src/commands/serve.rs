//! Serve command implementation.
//!
//! Orchestrates the server lifecycle:
//! - Configuration loading and validation
//! - Binding the listening socket (fatal on failure)
//! - Recursive watching of the configured folder
//! - Graceful shutdown on Ctrl+C

use crate::cli::Cli;
use crate::config::GlintConfig;
use crate::error::{CliError, Result};
use crate::server::{GlintServer, ServerState};
use crate::ui;
use glint_core::{Broadcaster, ChangeBatch, RELOAD, RecursiveWatcher, WatchOptions};
use std::sync::Arc;
use tokio::signal;
use tracing::{debug, info};

/// Execute the serve command.
///
/// # Errors
///
/// Returns errors for:
/// - Invalid configuration
/// - A port that cannot be bound
/// - A watcher backend that cannot be created
pub async fn execute(cli: Cli) -> Result<()> {
    let config = GlintConfig::load(&cli)?;
    config.validate()?;
    debug!(?config, "configuration loaded");

    let broadcaster = Arc::new(Broadcaster::new());
    let state = Arc::new(ServerState::from_config(Arc::clone(&broadcaster), &config));

    let server = GlintServer::bind(config.addr()?, state).await?;
    ui::success(&format!("Server is listening at {}", server.url()?));

    // Kept alive until shutdown; dropping it removes every observer
    let _watcher = match &config.watch {
        Some(folder) => {
            let options = WatchOptions {
                debounce: config.debounce(),
            };
            let watcher = RecursiveWatcher::watch_with(
                folder,
                options,
                reload_on_change(Arc::clone(&broadcaster)),
            )
            .await?;
            ui::info(&format!(
                "Watching {} ({} folders)",
                folder.display(),
                watcher.watched_count()
            ));
            Some(watcher)
        }
        None => {
            ui::info("No watch folder configured, live reload is off");
            None
        }
    };

    let mut server_handle = tokio::spawn(server.run());
    ui::info("Press Ctrl+C to stop");

    tokio::select! {
        _ = signal::ctrl_c() => {
            ui::info("Shutting down server...");
        }

        result = &mut server_handle => {
            match result {
                Ok(Ok(())) => ui::warning("Server task completed unexpectedly"),
                Ok(Err(e)) => return Err(e),
                Err(e) => return Err(CliError::Server(e.to_string())),
            }
        }
    }

    server_handle.abort();
    ui::success("Server stopped");
    Ok(())
}

/// Batch callback that logs the changed files and tells the browser to reload.
pub fn reload_on_change(
    broadcaster: Arc<Broadcaster>,
) -> impl Fn(&ChangeBatch) + Send + Sync + 'static {
    move |batch: &ChangeBatch| {
        let files: Vec<&str> = batch.iter().map(String::as_str).collect();
        info!("files changed:\n\t{}", files.join("\n\t"));

        // No client connected, or a gone one: nothing to do either way
        let _ = broadcaster.publish(RELOAD);
    }
}
