//! JSON File Settings Store - 单文件音色设置存储
//!
//! 实现 SettingsStorePort trait
//!
//! 写入先落到同目录下唯一命名的临时文件再 rename，
//! 并发写入时最后一次 rename 胜出，读取方不会看到写了一半的文件

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::application::ports::{SettingsError, SettingsStorePort};
use crate::domain::VoiceSettings;

/// JSON 文件设置存储
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("settings.json");
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()))
    }
}

#[async_trait]
impl SettingsStorePort for JsonFileSettingsStore {
    async fn load(&self) -> Result<VoiceSettings, SettingsError> {
        let data = match fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Settings file not found, using defaults");
                return Ok(VoiceSettings::default());
            }
            Err(e) => return Err(SettingsError::IoError(e.to_string())),
        };

        serde_json::from_slice(&data).map_err(|e| {
            SettingsError::SerializationError(format!(
                "Invalid settings file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn save(&self, settings: &VoiceSettings) -> Result<(), SettingsError> {
        let data = serde_json::to_vec(settings)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SettingsError::IoError(e.to_string()))?;
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, &data)
            .await
            .map_err(|e| SettingsError::IoError(e.to_string()))?;

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(SettingsError::IoError(e.to_string()));
        }

        tracing::debug!(
            path = %self.path.display(),
            voice = %settings.voice,
            language = %settings.language,
            "Settings saved"
        );

        Ok(())
    }
}
