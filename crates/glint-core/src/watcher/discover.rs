//! Recursive directory discovery.

use crate::error::{Result, WatchError};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// List `root` followed by every directory nested below it, depth-first.
///
/// Symlinked directories are not followed, so a symlink cycle cannot make the
/// walk loop. A subdirectory that cannot be read is still listed (its parent
/// found it) but its own children are skipped with a warning; siblings are
/// unaffected.
///
/// # Errors
///
/// Returns [`WatchError::RootUnreadable`] if `root` itself cannot be read.
pub async fn discover_directories(root: &Path) -> Result<Vec<PathBuf>> {
    let children = subdirectories(root)
        .await
        .map_err(|source| WatchError::RootUnreadable {
            path: root.to_path_buf(),
            source,
        })?;

    let mut directories = vec![root.to_path_buf()];
    let mut stack: Vec<PathBuf> = children.into_iter().rev().collect();

    while let Some(dir) = stack.pop() {
        match subdirectories(&dir).await {
            Ok(children) => stack.extend(children.into_iter().rev()),
            Err(err) => warn!(
                path = %dir.display(),
                error = %err,
                "cannot read directory, skipping its subdirectories"
            ),
        }
        directories.push(dir);
    }

    debug!(root = %root.display(), count = directories.len(), "discovered directories");
    Ok(directories)
}

/// Immediate child directories of `dir`, sorted by name.
async fn subdirectories(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut found = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        // `DirEntry::file_type` does not follow symlinks
        match entry.file_type().await {
            Ok(kind) if kind.is_dir() => found.push(entry.path()),
            Ok(_) => {}
            Err(err) => debug!(path = %entry.path().display(), error = %err, "skipping entry"),
        }
    }

    found.sort();
    Ok(found)
}
