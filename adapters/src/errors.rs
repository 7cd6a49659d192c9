//! Custom error types specific to the `adapters` crate.
//!
//! This module defines errors that can occur while reading or validating a user
//! directory, providing a unified error type for all adapters.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("failed to read directory file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse directory file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("user record at position {index} has no id")]
    MissingId { index: usize },

    #[error("duplicate user id: {0}")]
    DuplicateId(String),
}
