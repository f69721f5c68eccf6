//! Index document with the live-reload listener injected.

use crate::server::SharedState;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Replaces the first `<body>` tag; starts with `<body>` itself.
pub const RELOAD_SNIPPET: &str = include_str!("../../assets/reload-snippet.html");

const RELOAD_SCRIPT: &str = include_str!("../../assets/reload-client.js");

/// Put the reload listener right after the first `<body>` tag.
///
/// Documents without one are returned as they are.
pub fn inject_reload_snippet(html: &str) -> String {
    html.replacen("<body>", RELOAD_SNIPPET, 1)
}

pub(crate) async fn handle_index(State(state): State<SharedState>) -> Response {
    let index = &state.index;

    let html = match tokio::fs::read(index).await {
        Ok(bytes) => inject_reload_snippet(&String::from_utf8_lossy(&bytes)),
        Err(err) => {
            error!(path = %index.display(), error = %err, "can not read index document");
            String::new()
        }
    };

    ([(header::CONTENT_TYPE, "text/html")], html).into_response()
}

pub(crate) async fn handle_reload_script() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/javascript"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        RELOAD_SCRIPT,
    )
}
