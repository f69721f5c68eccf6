//! Configuration system for glint with multi-source loading.
//!
//! Merges settings from CLI flags, environment variables, and an optional
//! `glint.config.json`.
//! Priority: CLI > `GLINT_*` env > `PORT`/`WATCH` env > file > defaults

mod conversions;
mod defaults;
mod loading;
mod validation;

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub use conversions::CliOverrides;
pub use defaults::*;
pub use loading::CONFIG_FILE;

/// glint configuration - loaded from glint.config.json, the environment and flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GlintConfig {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Address to bind; must be an IP address
    #[serde(default = "default_host")]
    pub host: String,

    /// Directory to watch; live reload is off when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch: Option<PathBuf>,

    /// Directory static files are served from
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Index document served at `/`, relative to `root`
    #[serde(default = "default_index")]
    pub index: PathBuf,

    /// Watcher quiet period in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for GlintConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            watch: None,
            root: default_root(),
            index: default_index(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl GlintConfig {
    /// Socket address to bind.
    pub fn addr(&self) -> crate::error::Result<SocketAddr> {
        let ip = validation::parse_host(&self.host)?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Index document path, resolved against `root`.
    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.index)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
