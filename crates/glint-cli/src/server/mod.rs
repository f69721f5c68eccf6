//! HTTP server: live-reload event stream, index injection and static files.
//!
//! Routes:
//!
//! - `GET /sse` - Server-Sent Events stream; the newest connection receives reloads
//! - `GET /` - the index document with the reload listener injected
//! - `GET /__glint__/reload.js` - standalone reload listener for other pages
//! - anything else - a file under the serve root

mod files;
mod inject;
mod sse;

pub use files::content_type_for;
pub use inject::{RELOAD_SNIPPET, inject_reload_snippet};
pub use sse::SSE_BUFFER;

use crate::config::GlintConfig;
use crate::error::{CliError, Result};
use axum::{Router, routing::get};
use glint_core::Broadcaster;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

/// State shared by every request handler.
#[derive(Debug)]
pub struct ServerState {
    /// Delivers events to the most recent `/sse` client
    pub broadcaster: Arc<Broadcaster>,
    /// Directory static files are served from
    pub root: PathBuf,
    /// Index document served at `/`, already resolved against `root`
    pub index: PathBuf,
}

impl ServerState {
    pub fn new(
        broadcaster: Arc<Broadcaster>,
        root: impl Into<PathBuf>,
        index: impl Into<PathBuf>,
    ) -> Self {
        Self {
            broadcaster,
            root: root.into(),
            index: index.into(),
        }
    }

    /// State for the configured serve root and index document.
    pub fn from_config(broadcaster: Arc<Broadcaster>, config: &GlintConfig) -> Self {
        Self::new(broadcaster, &config.root, config.index_path())
    }
}

/// Thread-safe shared state.
pub type SharedState = Arc<ServerState>;

/// Build the axum router with all routes.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/sse", get(sse::handle_sse))
        .route("/", get(inject::handle_index))
        .route("/__glint__/reload.js", get(inject::handle_reload_script))
        .fallback(files::handle_file)
        .layer(
            // Pages opened from another origin can still subscribe to /sse
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// A bound, not yet running, server.
pub struct GlintServer {
    listener: TcpListener,
    app: Router,
}

impl GlintServer {
    /// Bind the listening socket.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Bind`] if the address is unavailable. There is no
    /// fallback to another port.
    pub async fn bind(addr: SocketAddr, state: SharedState) -> Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| CliError::Bind { addr, source })?;
        debug!(%addr, "listening socket bound");

        Ok(Self {
            listener,
            app: router(state),
        })
    }

    /// Actual bound address; differs from the requested one for port 0.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Browser-facing URL of the server.
    pub fn url(&self) -> Result<String> {
        let addr = self.local_addr()?;
        let host = if addr.ip().is_unspecified() {
            "localhost".to_string()
        } else {
            addr.ip().to_string()
        };
        Ok(format!("http://{}:{}", host, addr.port()))
    }

    /// Serve requests until the process exits or the task is aborted.
    pub async fn run(self) -> Result<()> {
        axum::serve(self.listener, self.app)
            .await
            .map_err(|e| CliError::Server(e.to_string()))
    }
}
