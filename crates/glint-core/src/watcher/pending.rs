//! Changed paths accumulated between debounce firings.

use indexmap::IndexSet;
use parking_lot::Mutex;

/// One coalesced batch of changed paths, in first-seen order.
pub type ChangeBatch = IndexSet<String>;

/// Deduplicated, insertion-ordered set of changed paths.
///
/// Observers add to it; the watcher drains it when the debounced relay fires,
/// so a dispatched path is never delivered twice.
#[derive(Debug, Default)]
pub struct PendingChangeSet {
    paths: Mutex<ChangeBatch>,
}

impl PendingChangeSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a changed path. Returns `false` if it was already pending.
    pub fn insert(&self, path: impl Into<String>) -> bool {
        self.paths.lock().insert(path.into())
    }

    /// Remove and return everything pending, leaving the set empty.
    pub fn take(&self) -> ChangeBatch {
        std::mem::take(&mut *self.paths.lock())
    }

    /// Whether `path` is waiting for the next batch.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.lock().contains(path)
    }

    /// Number of distinct pending paths.
    pub fn len(&self) -> usize {
        self.paths.lock().len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.paths.lock().is_empty()
    }
}
