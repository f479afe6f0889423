//! Error types for loading dictionaries and configuration.
//!
//! The interpreter itself has no failure path: an unrecognized word is a
//! non-transition, not an error.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the lookup tables.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// Failed to read a dictionary file.
    #[error("Failed to read dictionary '{name}' from '{path}': {source}")]
    ReadFile {
        name: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dictionary contents are not the expected JSON shape.
    #[error("Invalid dictionary '{name}': {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while loading `silly-nav.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
