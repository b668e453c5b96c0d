//! Markup Generator Port - 语音标记生成抽象
//!
//! 把纯文本交给外部生成式语言服务，取回 SSML 标记

use async_trait::async_trait;
use thiserror::Error;

/// 标记生成错误
#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Markup Generator Port
#[async_trait]
pub trait MarkupGeneratorPort: Send + Sync {
    /// 为一块纯文本生成 SSML 标记
    ///
    /// 返回内容原样交给合成服务，不做本地校验
    async fn generate(&self, text: &str) -> Result<String, MarkupError>;
}
