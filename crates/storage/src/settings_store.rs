use std::path::{Path, PathBuf};

use chatdesk_core::SettingsDocument;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use crate::error::StorageError;

/// Sole owner of the settings document.
///
/// Reads return a snapshot. Updates hold the lock across merge and persist,
/// so concurrent updates apply one at a time and none is lost. The file is
/// rewritten wholesale on every update; edits made to it while the process
/// runs are not picked up.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    document: Mutex<SettingsDocument>,
}

impl SettingsStore {
    /// Loads the document at `path`, writing the defaults first if the file is absent.
    ///
    /// Calling this again for the same path returns the persisted document
    /// untouched.
    ///
    /// # Errors
    /// Returns an error if the file cannot be probed, read, or written, or if
    /// it does not contain a JSON object.
    pub async fn initialize(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let exists =
            tokio::fs::try_exists(&path).await.map_err(|e| StorageError::io(&path, e))?;

        let document = if exists {
            let raw = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| StorageError::io(&path, e))?;
            let document: SettingsDocument =
                serde_json::from_str(&raw).map_err(|e| StorageError::invalid(&path, e))?;
            tracing::info!(path = %path.display(), keys = document.as_map().len(), "loaded settings");
            document
        } else {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StorageError::io(parent, e))?;
            }
            let document = SettingsDocument::default();
            write_document(&path, &document).await?;
            tracing::info!(path = %path.display(), "settings file missing, wrote defaults");
            document
        };

        Ok(Self { path, document: Mutex::new(document) })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the current in-memory document.
    pub async fn get(&self) -> SettingsDocument {
        self.document.lock().await.clone()
    }

    /// Shallow-merges `partial` into the document, persists it, and returns the result.
    ///
    /// Values are stored as given. The in-memory document only changes once
    /// the file write succeeded.
    ///
    /// # Errors
    /// Returns an error if the merged document cannot be serialized or written.
    pub async fn update(&self, partial: Map<String, Value>) -> Result<SettingsDocument, StorageError> {
        let mut guard = self.document.lock().await;
        let changed: Vec<String> = partial.keys().cloned().collect();

        let mut merged = guard.clone();
        merged.merge(partial);
        write_document(&self.path, &merged).await?;
        *guard = merged.clone();

        tracing::info!(keys = ?changed, "settings updated");
        Ok(merged)
    }
}

async fn write_document(path: &Path, document: &SettingsDocument) -> Result<(), StorageError> {
    let body = serde_json::to_string_pretty(document).map_err(|e| StorageError::invalid(path, e))?;
    tokio::fs::write(path, body).await.map_err(|e| StorageError::io(path, e))
}
