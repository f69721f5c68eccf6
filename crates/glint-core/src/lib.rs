//! Glint core - the watch and notify half of the glint dev server.
//!
//! This crate knows nothing about HTTP. It provides the three pieces the
//! server wires together:
//!
//! - [`debounce`] - coalesces bursts of triggers into one delayed action
//! - [`watcher`] - recursive directory discovery with per-directory observers
//!   feeding a shared, debounced change set
//! - [`broadcast`] - a single-sink event broadcaster used to push `reload`
//!   notifications to the most recently connected browser
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use glint_core::{Broadcaster, RecursiveWatcher, RELOAD};
//!
//! # async fn run() -> glint_core::Result<()> {
//! let broadcaster = Arc::new(Broadcaster::new());
//! let notify = Arc::clone(&broadcaster);
//!
//! let _watcher = RecursiveWatcher::watch("./build", move |batch| {
//!     tracing::info!(files = batch.len(), "files changed");
//!     let _ = notify.publish(RELOAD);
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod broadcast;
pub mod debounce;
pub mod error;
pub mod watcher;

pub use broadcast::{Broadcaster, CONNECTED, ChannelSink, EventSink, Publish, RELOAD, SinkError};
pub use debounce::Debouncer;
pub use error::{Result, WatchError};
pub use watcher::{
    ChangeBatch, PendingChangeSet, RecursiveWatcher, WatchOptions, WatchState, WatchedDirectory,
    discover_directories,
};
