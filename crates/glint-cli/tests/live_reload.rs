//! End to end: a real watcher feeding the `/sse` stream.

use axum::body::{Body, BodyDataStream};
use axum::http::Request;
use glint_cli::commands::serve::reload_on_change;
use glint_cli::server::{ServerState, router};
use glint_core::{Broadcaster, RecursiveWatcher, WatchOptions};
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::timeout;
use tokio_stream::StreamExt;
use tower::ServiceExt;

async fn next_frame(stream: &mut BodyDataStream, wait: Duration) -> Option<String> {
    let frame = timeout(wait, stream.next()).await.ok()??.ok()?;
    Some(String::from_utf8_lossy(&frame).into_owned())
}

#[tokio::test]
async fn test_file_change_sends_exactly_one_reload() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("css")).unwrap();
    fs::write(root.join("index.html"), "<body>v1").unwrap();

    let broadcaster = Arc::new(Broadcaster::new());
    let state = Arc::new(ServerState::new(
        Arc::clone(&broadcaster),
        root,
        root.join("index.html"),
    ));
    let app = router(state);

    let response = app
        .oneshot(Request::get("/sse").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let mut stream = response.into_body().into_data_stream();
    assert_eq!(
        next_frame(&mut stream, Duration::from_secs(1)).await.as_deref(),
        Some("data: connected\n\n")
    );

    let _watcher = RecursiveWatcher::watch_with(
        root,
        WatchOptions {
            debounce: Duration::from_millis(100),
        },
        reload_on_change(Arc::clone(&broadcaster)),
    )
    .await
    .unwrap();

    // Nothing has changed yet
    assert_eq!(next_frame(&mut stream, Duration::from_millis(300)).await, None);

    fs::write(root.join("index.html"), "<body>v2").unwrap();
    fs::write(root.join("css/site.css"), "body {}").unwrap();

    assert_eq!(
        next_frame(&mut stream, Duration::from_secs(3)).await.as_deref(),
        Some("data: reload\n\n")
    );
    assert_eq!(next_frame(&mut stream, Duration::from_millis(500)).await, None);
}

#[tokio::test]
async fn test_change_with_no_client_connected_is_dropped() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let broadcaster = Arc::new(Broadcaster::new());
    let _watcher = RecursiveWatcher::watch(root, reload_on_change(Arc::clone(&broadcaster)))
        .await
        .unwrap();

    fs::write(root.join("early.html"), "x").unwrap();
    tokio::time::sleep(Duration::from_millis(400)).await;

    // A client arriving later only sees its own handshake
    let state = Arc::new(ServerState::new(
        Arc::clone(&broadcaster),
        root,
        root.join("index.html"),
    ));
    let response = router(state)
        .oneshot(Request::get("/sse").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let mut stream = response.into_body().into_data_stream();

    assert_eq!(
        next_frame(&mut stream, Duration::from_secs(1)).await.as_deref(),
        Some("data: connected\n\n")
    );
    assert_eq!(next_frame(&mut stream, Duration::from_millis(300)).await, None);
}
