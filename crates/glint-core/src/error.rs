//! Error types for watcher setup.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while setting up directory watching.
///
/// Only backend creation is surfaced to callers of
/// [`RecursiveWatcher::watch`](crate::RecursiveWatcher::watch); everything
/// else is logged and absorbed there.
#[derive(Debug, Error)]
pub enum WatchError {
    /// The OS watcher backend could not be created or refused a path
    #[error("File watcher error: {0}")]
    Backend(#[from] notify::Error),

    /// The watch root is missing, not a directory, or unreadable
    #[error("Cannot read watch root {}: {source}", .path.display())]
    RootUnreadable {
        /// Root that failed to enumerate
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using `WatchError` as the default error type.
pub type Result<T, E = WatchError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_unreadable_message() {
        let err = WatchError::RootUnreadable {
            path: PathBuf::from("/tmp/missing"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing"));
        assert!(msg.contains("no such directory"));
    }
}
