//! Sentence Splitter Port - 分句抽象
//!
//! 定义句子边界检测的抽象接口，具体实现在 infrastructure/adapters 层

use thiserror::Error;

/// 分句错误
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("Segmenter unavailable: {0}")]
    Unavailable(String),

    #[error("Segmentation failed: {0}")]
    Failed(String),
}

/// Sentence Splitter Port
///
/// 对相同输入必须返回相同结果，不产生副作用
pub trait SentenceSplitterPort: Send + Sync {
    /// 将文本切分为有序句子序列
    fn split(&self, text: &str) -> Result<Vec<String>, SplitError>;
}
