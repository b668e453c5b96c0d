//! Text Chunker - 分句 + 分块
//!
//! 分句失败时退化为单块：取原文前 `max_bytes` 字节，记录错误但不向上传播

use std::sync::Arc;

use crate::application::ports::SentenceSplitterPort;
use crate::domain::{build_chunks, truncate_to_bytes};

/// 文本分块器
pub struct TextChunker {
    splitter: Arc<dyn SentenceSplitterPort>,
    max_bytes: usize,
}

impl TextChunker {
    pub fn new(splitter: Arc<dyn SentenceSplitterPort>, max_bytes: usize) -> Self {
        Self {
            splitter,
            max_bytes,
        }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// 将原文切分为有序合成块
    ///
    /// 空文本返回单个空块
    pub fn chunk(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return vec![String::new()];
        }

        match self.splitter.split(text) {
            Ok(sentences) => build_chunks(&sentences, self.max_bytes),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    text_len = text.len(),
                    max_bytes = self.max_bytes,
                    "Error splitting text, falling back to a single truncated chunk"
                );
                vec![truncate_to_bytes(text, self.max_bytes).to_string()]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::SplitError;
    use crate::application::testing::PeriodSplitter;

    struct BrokenSplitter;

    impl SentenceSplitterPort for BrokenSplitter {
        fn split(&self, _text: &str) -> Result<Vec<String>, SplitError> {
            Err(SplitError::Unavailable("model not loaded".to_string()))
        }
    }

    #[test]
    fn test_empty_text_yields_single_empty_chunk() {
        let chunker = TextChunker::new(Arc::new(PeriodSplitter), 4800);
        assert_eq!(chunker.chunk(""), vec![String::new()]);
    }

    #[test]
    fn test_short_text_yields_single_trimmed_chunk() {
        let chunker = TextChunker::new(Arc::new(PeriodSplitter), 4800);
        assert_eq!(chunker.chunk("  Hello there.  "), vec!["Hello there.".to_string()]);
    }

    #[test]
    fn test_rechunked_sentences_match_original() {
        let text = (1..=60)
            .map(|i| format!("This is sentence {}.", i))
            .collect::<Vec<_>>()
            .join(" ");
        let splitter = PeriodSplitter;
        let chunker = TextChunker::new(Arc::new(PeriodSplitter), 100);

        let chunks = chunker.chunk(&text);
        assert!(chunks.len() > 1);

        let resplit: Vec<String> = chunks
            .iter()
            .flat_map(|c| splitter.split(c).unwrap())
            .collect();
        assert_eq!(resplit, splitter.split(&text).unwrap());
    }

    #[test]
    fn test_split_failure_falls_back_to_truncated_text() {
        let chunker = TextChunker::new(Arc::new(BrokenSplitter), 8);
        assert_eq!(chunker.chunk("abcdefghijkl. mnop."), vec!["abcdefgh".to_string()]);
    }

    #[test]
    fn test_split_failure_fallback_keeps_utf8_valid() {
        let chunker = TextChunker::new(Arc::new(BrokenSplitter), 7);
        assert_eq!(chunker.chunk("合成语音。"), vec!["合成".to_string()]);
    }
}
