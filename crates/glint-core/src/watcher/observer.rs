//! Per-directory observers.

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Observer state of one discovered directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// Discovered, but the OS observer could not be installed
    Unwatched,
    /// An OS observer is installed
    Watching,
}

/// A directory found during the initial scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedDirectory {
    path: PathBuf,
    state: WatchState,
}

impl WatchedDirectory {
    pub(crate) fn new(path: PathBuf, state: WatchState) -> Self {
        Self { path, state }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    pub fn is_watching(&self) -> bool {
        self.state == WatchState::Watching
    }
}

pub(crate) type SharedBackend = Arc<Mutex<RecommendedWatcher>>;

/// Non-recursive OS watch on a single directory, released on drop.
pub(crate) struct DirectoryObserver {
    path: PathBuf,
    backend: SharedBackend,
}

impl DirectoryObserver {
    pub(crate) fn install(backend: &SharedBackend, path: &Path) -> notify::Result<Self> {
        backend.lock().watch(path, RecursiveMode::NonRecursive)?;
        Ok(Self {
            path: path.to_path_buf(),
            backend: Arc::clone(backend),
        })
    }
}

impl Drop for DirectoryObserver {
    fn drop(&mut self) {
        // The directory may already be gone, in which case the OS dropped the watch.
        let _ = self.backend.lock().unwatch(&self.path);
    }
}
