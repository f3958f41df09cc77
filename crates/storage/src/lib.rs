//! Storage layer for chatdesk
//!
//! Holds the settings document in memory and mirrors it to a single JSON file.

mod error;
mod settings_store;

pub use error::StorageError;
pub use settings_store::SettingsStore;
