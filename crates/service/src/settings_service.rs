use std::sync::Arc;

use chatdesk_core::SettingsDocument;
use chatdesk_storage::SettingsStore;
use serde_json::{Map, Value};

use crate::ServiceError;

pub struct SettingsService {
    store: Arc<SettingsStore>,
}

impl SettingsService {
    #[must_use]
    pub const fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }

    pub async fn get_settings(&self) -> SettingsDocument {
        self.store.get().await
    }

    pub async fn update_settings(
        &self,
        partial: Map<String, Value>,
    ) -> Result<SettingsDocument, ServiceError> {
        Ok(self.store.update(partial).await?)
    }
}
