//! Pragmatic Sentence Splitter
//!
//! 基于 `pragmatic_segmenter`（Golden Rules 规则集）的分句实现，
//! 能处理缩写、小数点、省略号等标点歧义

use std::panic::{self, AssertUnwindSafe};

use pragmatic_segmenter::Segmenter;

use crate::application::ports::{SentenceSplitterPort, SplitError};

/// 规则分句器
///
/// 每次调用构建一个新的 `Segmenter`，请求之间不共享状态
#[derive(Debug, Default, Clone, Copy)]
pub struct PragmaticSentenceSplitter;

impl PragmaticSentenceSplitter {
    pub fn new() -> Self {
        Self
    }
}

impl SentenceSplitterPort for PragmaticSentenceSplitter {
    fn split(&self, text: &str) -> Result<Vec<String>, SplitError> {
        if text.is_empty() {
            return Ok(vec![String::new()]);
        }

        let segmenter =
            Segmenter::new().map_err(|e| SplitError::Unavailable(format!("{:?}", e)))?;

        // 第三方规则引擎内部 panic 视为分句失败
        let sentences = panic::catch_unwind(AssertUnwindSafe(|| {
            segmenter
                .segment(text)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect::<Vec<String>>()
        }))
        .map_err(|_| SplitError::Failed("segmenter panicked".to_string()))?;

        tracing::trace!(
            text_len = text.len(),
            sentence_count = sentences.len(),
            "Text segmented"
        );

        Ok(sentences)
    }
}
