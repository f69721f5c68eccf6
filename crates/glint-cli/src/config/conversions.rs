use crate::cli::Cli;
use serde::Serialize;
use std::path::PathBuf;

/// Flags the user actually passed, shaped like [`GlintConfig`](super::GlintConfig)
/// so figment can merge them as the top layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debounce_ms: Option<u64>,
}

impl From<&Cli> for CliOverrides {
    fn from(cli: &Cli) -> Self {
        Self {
            port: cli.port,
            host: cli.host.clone(),
            watch: cli.watch.clone(),
            root: cli.root.clone(),
            index: cli.index.clone(),
            debounce_ms: cli.debounce_ms,
        }
    }
}
