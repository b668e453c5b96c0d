//! Segmenter Adapter - 分句实现

mod pragmatic_splitter;

pub use pragmatic_splitter::PragmaticSentenceSplitter;
