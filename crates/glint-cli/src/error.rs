//! Error handling for the glint CLI.
//!
//! Errors here only exist for startup: once the server is listening, file,
//! directory and broadcast failures are logged and absorbed where they happen.
//!
//! - **Top-level errors** (`CliError`) are what `main` renders
//! - **Config errors** (`ConfigError`) carry a field, value and hint
//! - **Error conversion** is automatic via `#[from]` attributes

mod report;

pub use report::cli_error_to_miette;

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The listening socket could not be bound
    #[error("Failed to bind to {addr}: {source}\n\nHint: Is another server already using this port? Try --port <PORT>")]
    Bind {
        /// Address that was requested
        addr: SocketAddr,
        /// Underlying socket error
        #[source]
        source: std::io::Error,
    },

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP server errors after startup
    #[error("Server error: {0}")]
    Server(String),

    /// Watcher setup errors
    #[error(transparent)]
    Watch(#[from] glint_core::WatchError),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file doesn't exist
    #[error("Config file not found: {}\n\nHint: Create glint.config.json or drop --config to use defaults", .0.display())]
    NotFound(PathBuf),

    /// The merged configuration could not be deserialized
    #[error("Invalid configuration: {0}\n\nHint: Check glint.config.json, GLINT_* / PORT / WATCH variables and flag values")]
    Extract(String),

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;
