//! Speech Synthesizer Port - 语音合成抽象
//!
//! 定义 SSML 到音频的合成接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::VoiceSettings;

/// 合成错误
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 合成请求
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    /// SSML 标记
    pub ssml: String,
    /// 音色名称
    pub voice_name: String,
    /// 语言代码
    pub language_code: String,
    /// 语速
    pub speaking_rate: f64,
    /// 音高
    pub pitch: f64,
}

impl SpeechRequest {
    pub fn new(ssml: impl Into<String>, settings: &VoiceSettings) -> Self {
        Self {
            ssml: ssml.into(),
            voice_name: settings.voice.clone(),
            language_code: settings.language.clone(),
            speaking_rate: settings.speed,
            pitch: settings.pitch,
        }
    }
}

/// Speech Synthesizer Port
///
/// 返回的音频必须是可按字节直接拼接的编码（MP3）
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 合成一块 SSML，返回音频字节
    async fn synthesize(&self, request: SpeechRequest) -> Result<Vec<u8>, SynthesisError>;
}
