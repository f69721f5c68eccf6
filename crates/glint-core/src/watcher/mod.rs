//! Recursive directory watcher with change coalescing.
//!
//! [`RecursiveWatcher::watch`] scans the root once, installs a non-recursive
//! observer on every directory it finds, and funnels all observer events into
//! one [`PendingChangeSet`]. A shared [`Debouncer`] relays the set to the
//! batch callback after the quiet period, draining it in the process.
//!
//! Directories created after the scan are not picked up. Changes inside them
//! go unnoticed, although their creation itself shows up as a change in the
//! parent directory.

mod discover;
mod observer;
mod pending;

pub use discover::discover_directories;
pub use observer::{WatchState, WatchedDirectory};
pub use pending::{ChangeBatch, PendingChangeSet};

use crate::debounce::Debouncer;
use crate::error::Result;
use notify::{Event, EventKind};
use observer::{DirectoryObserver, SharedBackend};
use parking_lot::Mutex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, trace, warn};

/// Default quiet period before a batch is relayed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Watcher tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchOptions {
    /// Quiet period between the last change and the batch callback
    pub debounce: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// Watches a root directory and every subdirectory present at scan time.
///
/// Dropping the watcher removes all observers and stops batch delivery.
pub struct RecursiveWatcher {
    root: PathBuf,
    directories: Vec<WatchedDirectory>,
    // Dropped before `pump`; each observer unwatches its directory.
    _observers: Vec<DirectoryObserver>,
    pump: JoinHandle<()>,
}

impl RecursiveWatcher {
    /// Watch `root` with the default 100ms debounce.
    ///
    /// See [`watch_with`](Self::watch_with).
    pub async fn watch<F>(root: impl Into<PathBuf>, on_batch: F) -> Result<Self>
    where
        F: Fn(&ChangeBatch) + Send + Sync + 'static,
    {
        Self::watch_with(root, WatchOptions::default(), on_batch).await
    }

    /// Scan `root`, install observers, and start relaying batches to
    /// `on_batch`.
    ///
    /// An unreadable root is logged and yields a watcher with no directories;
    /// an observer that fails to install is logged and left
    /// [`WatchState::Unwatched`]. Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error only if the OS watcher backend cannot be created.
    pub async fn watch_with<F>(
        root: impl Into<PathBuf>,
        options: WatchOptions,
        on_batch: F,
    ) -> Result<Self>
    where
        F: Fn(&ChangeBatch) + Send + Sync + 'static,
    {
        let root = root.into();
        let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

        // Called on notify's thread; only forwards into the async pump.
        let backend = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) => {
                // Receiver is gone only once the watcher is being dropped.
                let _ = event_tx.send(event);
            }
            Err(err) => warn!(error = %err, "file watch error"),
        })?;
        let backend: SharedBackend = Arc::new(Mutex::new(backend));

        let candidates = match discover_directories(&root).await {
            Ok(dirs) => dirs,
            Err(err) => {
                error!(error = %err, "not watching anything");
                Vec::new()
            }
        };

        let mut directories = Vec::with_capacity(candidates.len());
        let mut observers = Vec::with_capacity(candidates.len());
        for path in candidates {
            match DirectoryObserver::install(&backend, &path) {
                Ok(observer) => {
                    observers.push(observer);
                    directories.push(WatchedDirectory::new(path, WatchState::Watching));
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "cannot watch directory");
                    directories.push(WatchedDirectory::new(path, WatchState::Unwatched));
                }
            }
        }

        let relay = Debouncer::new(
            move |pending: Arc<PendingChangeSet>| {
                let batch = pending.take();
                // A trigger can race a drain that already took its path.
                if !batch.is_empty() {
                    on_batch(&batch);
                }
            },
            options.debounce,
        );
        let pump = tokio::spawn(pump_events(event_rx, relay));

        info!(
            root = %root.display(),
            directories = observers.len(),
            "watching folder"
        );

        Ok(Self {
            root,
            directories,
            _observers: observers,
            pump,
        })
    }

    /// The root this watcher was started on.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every directory found by the scan, with its observer state.
    pub fn directories(&self) -> &[WatchedDirectory] {
        &self.directories
    }

    /// Paths of directories with an installed observer.
    pub fn watched_paths(&self) -> impl Iterator<Item = &Path> {
        self.directories
            .iter()
            .filter(|dir| dir.is_watching())
            .map(WatchedDirectory::path)
    }

    /// Number of directories with an installed observer.
    pub fn watched_count(&self) -> usize {
        self.watched_paths().count()
    }
}

impl Drop for RecursiveWatcher {
    fn drop(&mut self) {
        self.pump.abort();
    }
}

impl fmt::Debug for RecursiveWatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecursiveWatcher")
            .field("root", &self.root)
            .field("watched", &self.watched_count())
            .finish()
    }
}

/// Single writer for the pending set: records each changed path and re-arms
/// the relay.
async fn pump_events(
    mut events: mpsc::UnboundedReceiver<Event>,
    relay: Debouncer<Arc<PendingChangeSet>>,
) {
    let pending = Arc::new(PendingChangeSet::new());

    while let Some(event) = events.recv().await {
        // Reads are not changes; the server itself opens files constantly.
        if matches!(event.kind, EventKind::Access(_)) {
            continue;
        }
        trace!(?event, "watch event");

        let mut recorded = false;
        for path in &event.paths {
            pending.insert(path.to_string_lossy().into_owned());
            recorded = true;
        }
        if recorded {
            relay.trigger(Arc::clone(&pending));
        }
    }

    debug!("watch event pump finished");
}
