//! Server-Sent Events endpoint.

use crate::server::SharedState;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::response::sse::{Event, Sse};
use glint_core::{CONNECTED, ChannelSink};
use std::convert::Infallible;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::{self as stream, StreamExt};
use tracing::info;

/// Events buffered per stream before new ones are dropped.
pub const SSE_BUFFER: usize = 16;

/// Attach the requesting client as the broadcaster's sink.
///
/// The previous client is displaced but its response stays open: once its
/// channel closes the stream parks forever instead of ending.
pub(crate) async fn handle_sse(State(state): State<SharedState>) -> impl IntoResponse {
    info!("initialize server-sent events");

    let (sink, rx) = ChannelSink::new(SSE_BUFFER);
    let _ = state.broadcaster.attach(sink, CONNECTED);

    let stream = ReceiverStream::new(rx)
        .chain(stream::pending())
        .map(|data| Ok::<_, Infallible>(Event::default().data(data)));

    // Sse sets the content type and `Cache-Control: no-cache` itself
    ([(header::CONNECTION, "keep-alive")], Sse::new(stream))
}
