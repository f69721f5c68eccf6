//! Integration tests for the recursive watcher.
//!
//! These run against real temporary directories and the platform watcher
//! backend, so they wait on wall-clock time instead of a paused clock.

use glint_core::{ChangeBatch, RecursiveWatcher, WatchOptions};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::sleep;

/// Longer than the debounce plus typical backend latency.
const SETTLE: Duration = Duration::from_millis(600);

type Batches = Arc<Mutex<Vec<ChangeBatch>>>;

async fn watch_recording(root: &Path) -> (RecursiveWatcher, Batches) {
    let batches: Batches = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&batches);
    let watcher = RecursiveWatcher::watch(root, move |batch| sink.lock().push(batch.clone()))
        .await
        .expect("watcher backend should start");
    (watcher, batches)
}

fn key(path: PathBuf) -> String {
    path.to_string_lossy().into_owned()
}

fn mentions(batches: &[ChangeBatch], needle: &str) -> bool {
    batches
        .iter()
        .flat_map(|batch| batch.iter())
        .any(|path| path.ends_with(needle))
}

#[tokio::test]
async fn test_observes_every_directory_of_synthetic_tree() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    // Depth 3, width 2: 2 + 4 + 8 nested directories.
    let mut expected = vec![root.to_path_buf()];
    for a in ["a0", "a1"] {
        for b in ["b0", "b1"] {
            for c in ["c0", "c1"] {
                fs::create_dir_all(root.join(a).join(b).join(c)).unwrap();
            }
            expected.push(root.join(a).join(b));
        }
        expected.push(root.join(a));
    }
    for a in ["a0", "a1"] {
        for b in ["b0", "b1"] {
            for c in ["c0", "c1"] {
                expected.push(root.join(a).join(b).join(c));
            }
        }
    }

    let (watcher, _batches) = watch_recording(root).await;

    assert_eq!(watcher.watched_count(), 15);
    let mut watched: Vec<PathBuf> = watcher.watched_paths().map(Path::to_path_buf).collect();
    watched.sort();
    expected.sort();
    assert_eq!(watched, expected);
}

#[tokio::test]
async fn test_burst_yields_one_deduplicated_batch() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("css")).unwrap();

    let (_watcher, batches) = watch_recording(root).await;

    fs::write(root.join("index.html"), "<body></body>").unwrap();
    fs::write(root.join("css/site.css"), "body {}").unwrap();
    fs::write(root.join("index.html"), "<body>again</body>").unwrap();
    sleep(SETTLE).await;

    let batches = batches.lock();
    assert_eq!(batches.len(), 1, "batches: {batches:?}");

    let batch = &batches[0];
    assert!(batch.contains(&key(root.join("index.html"))));
    assert!(batch.contains(&key(root.join("css/site.css"))));
    let index_entries = batch.iter().filter(|p| p.ends_with("index.html")).count();
    assert_eq!(index_entries, 1);
}

#[tokio::test]
async fn test_spaced_bursts_yield_separate_batches_without_carryover() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let (_watcher, batches) = watch_recording(root).await;

    fs::write(root.join("first.js"), "1").unwrap();
    sleep(SETTLE).await;
    fs::write(root.join("second.js"), "2").unwrap();
    sleep(SETTLE).await;

    let batches = batches.lock();
    assert_eq!(batches.len(), 2, "batches: {batches:?}");
    assert!(batches[0].contains(&key(root.join("first.js"))));
    assert!(batches[1].contains(&key(root.join("second.js"))));
    assert!(!batches[1].contains(&key(root.join("first.js"))));
}

#[tokio::test]
async fn test_subdirectory_present_at_scan_is_observed() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("sub")).unwrap();

    let (_watcher, batches) = watch_recording(root).await;

    fs::write(root.join("sub/a.txt"), "hello").unwrap();
    sleep(SETTLE).await;

    let batches = batches.lock();
    assert!(mentions(&batches, "sub/a.txt"), "batches: {batches:?}");
}

#[tokio::test]
async fn test_subdirectory_created_after_scan_is_missed() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let (watcher, batches) = watch_recording(root).await;
    assert_eq!(watcher.watched_count(), 1);

    // The creation is a change in the root, so it does show up...
    fs::create_dir(root.join("sub")).unwrap();
    sleep(SETTLE).await;
    assert!(mentions(&batches.lock(), "sub"));

    // ...but nothing observes the new directory itself.
    fs::write(root.join("sub/a.txt"), "hello").unwrap();
    sleep(SETTLE).await;

    let batches = batches.lock();
    assert!(!mentions(&batches, "a.txt"), "batches: {batches:?}");
    assert_eq!(watcher.watched_count(), 1);
}

#[tokio::test]
async fn test_missing_root_watches_nothing_without_failing() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");

    let (watcher, batches) = watch_recording(&missing).await;

    assert_eq!(watcher.watched_count(), 0);
    assert!(watcher.directories().is_empty());
    assert_eq!(watcher.root(), missing.as_path());

    fs::write(temp.path().join("elsewhere.txt"), "x").unwrap();
    sleep(SETTLE).await;
    assert!(batches.lock().is_empty());
}

#[tokio::test]
async fn test_custom_debounce_is_honoured() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let batches: Batches = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&batches);
    let options = WatchOptions {
        debounce: Duration::from_millis(400),
    };
    let _watcher = RecursiveWatcher::watch_with(root, options, move |batch| {
        sink.lock().push(batch.clone())
    })
    .await
    .unwrap();

    fs::write(root.join("slow.txt"), "x").unwrap();
    sleep(Duration::from_millis(150)).await;
    assert!(batches.lock().is_empty());

    sleep(Duration::from_millis(800)).await;
    assert_eq!(batches.lock().len(), 1);
}

#[tokio::test]
async fn test_dropping_watcher_stops_delivery() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let (watcher, batches) = watch_recording(root).await;
    drop(watcher);

    fs::write(root.join("after-drop.txt"), "x").unwrap();
    sleep(SETTLE).await;
    assert!(batches.lock().is_empty());
}
