//! In-Memory Settings Store Implementation

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{SettingsError, SettingsStorePort};
use crate::domain::VoiceSettings;

/// 内存设置存储，进程重启后恢复默认值
pub struct InMemorySettingsStore {
    settings: RwLock<VoiceSettings>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::with_settings(VoiceSettings::default())
    }

    pub fn with_settings(settings: VoiceSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }
}

impl Default for InMemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsStorePort for InMemorySettingsStore {
    async fn load(&self) -> Result<VoiceSettings, SettingsError> {
        Ok(self.settings.read().await.clone())
    }

    async fn save(&self, settings: &VoiceSettings) -> Result<(), SettingsError> {
        *self.settings.write().await = settings.clone();
        tracing::debug!(voice = %settings.voice, "Settings updated");
        Ok(())
    }
}
