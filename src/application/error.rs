//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{MarkupError, SettingsError, SynthesisError};
use crate::domain::VoiceSettingsError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 输入校验错误，发生在任何外部调用之前
    #[error("{0}")]
    ValidationError(String),

    /// 标记生成服务失败
    #[error("Markup generation failed at chunk {chunk_index}/{chunk_count}: {source}")]
    MarkupGeneration {
        chunk_index: usize,
        chunk_count: usize,
        #[source]
        source: MarkupError,
    },

    /// 语音合成服务失败
    #[error("Speech synthesis failed at chunk {chunk_index}/{chunk_count}: {source}")]
    SpeechSynthesis {
        chunk_index: usize,
        chunk_count: usize,
        #[source]
        source: SynthesisError,
    },

    /// 设置存储错误
    #[error("Settings storage error: {0}")]
    StorageError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 是否为外部服务故障
    pub fn is_external(&self) -> bool {
        matches!(
            self,
            Self::MarkupGeneration { .. } | Self::SpeechSynthesis { .. }
        )
    }
}

impl From<SettingsError> for ApplicationError {
    fn from(err: SettingsError) -> Self {
        Self::StorageError(err.to_string())
    }
}

impl From<VoiceSettingsError> for ApplicationError {
    fn from(err: VoiceSettingsError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
