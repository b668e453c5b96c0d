//! Settings Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::SettingsStorePort;
use crate::application::queries::GetSettings;
use crate::domain::VoiceSettings;

/// GetSettings Handler
pub struct GetSettingsHandler {
    settings_store: Arc<dyn SettingsStorePort>,
}

impl GetSettingsHandler {
    pub fn new(settings_store: Arc<dyn SettingsStorePort>) -> Self {
        Self { settings_store }
    }

    pub async fn handle(&self, _query: GetSettings) -> Result<VoiceSettings, ApplicationError> {
        Ok(self.settings_store.load().await?)
    }
}
