//! Typed error enum for the storage crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing the settings file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The settings file could not be read, written, or probed.
    #[error("settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file does not hold a JSON object, or the document failed to serialize.
    #[error("settings file {path} is not a valid settings document: {source}")]
    InvalidDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }

    pub(crate) fn invalid(path: &std::path::Path, source: serde_json::Error) -> Self {
        Self::InvalidDocument { path: path.to_path_buf(), source }
    }
}
