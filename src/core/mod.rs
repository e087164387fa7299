// src/core/mod.rs

/// Registry of automobiles and per-automobile handles.
pub mod catalog;
/// Timestamped failure log.
pub mod diagnostics;
/// Failure kinds and the crate error type.
pub mod errors;
/// Text source parser.
pub mod parser;
/// Settings file location.
pub mod paths;
/// Report-and-retry handling of unknown names.
pub mod recovery;
/// `carconf.toml` settings.
pub mod settings;
/// Binary snapshots of one automobile.
pub mod snapshot;
