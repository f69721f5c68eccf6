//! Command implementations for the glint CLI.
//!
//! glint runs a single command, [`serve`], which binds the server and, when a
//! watch folder is configured, wires the watcher to the broadcaster.

pub mod serve;

pub use serve::execute as serve_execute;
