//! Settings Store Port - 音色设置存储抽象
//!
//! 全局只保存一份"最近一次使用"的设置。
//! 并发语义为最后写入者胜出：读取-合并-写入之间不加锁，
//! 并发请求的写入顺序不确定。

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::VoiceSettings;

/// 设置存储错误
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Settings Store Port
#[async_trait]
pub trait SettingsStorePort: Send + Sync {
    /// 读取当前设置，从未保存过时返回默认值
    async fn load(&self) -> Result<VoiceSettings, SettingsError>;

    /// 覆盖保存设置
    async fn save(&self, settings: &VoiceSettings) -> Result<(), SettingsError>;
}
