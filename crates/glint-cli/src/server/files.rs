//! Static file serving from the serve root.
//!
//! A file that cannot be served is logged and answered with 200 and an empty
//! body, never a 404.

use crate::server::SharedState;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Uri, header};
use axum::response::{IntoResponse, Response};
use std::path::{Component, Path, PathBuf};
use tracing::{error, info};

/// Content type for a file extension; anything unknown is plain text.
pub fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("css") => "text/css",
        Some("html") => "text/html",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        _ => "text/plain",
    }
}

/// Map a request path onto the serve root, refusing to leave it.
pub(crate) fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = Path::new(request_path.trim_start_matches('/'));
    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return None;
    }
    Some(root.join(relative))
}

pub(crate) async fn handle_file(State(state): State<SharedState>, uri: Uri) -> Response {
    let request_path = uri.path();
    info!(path = request_path, "serve");

    let Some(file_path) = resolve(&state.root, request_path) else {
        error!(path = request_path, "can not serve file outside the root");
        return empty();
    };

    match tokio::fs::read(&file_path).await {
        Ok(content) => {
            let mut response = Body::from(content).into_response();
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static(content_type_for(&file_path)),
            );
            response
        }
        Err(err) => {
            error!(path = %file_path.display(), error = %err, "can not serve file");
            empty()
        }
    }
}

/// Status 200 with no body and no content type.
fn empty() -> Response {
    Body::empty().into_response()
}
