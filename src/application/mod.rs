//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（分句、标记生成、语音合成、设置存储）
//! - chunker: 分句 + 分块（带降级）
//! - pipeline: 合成流水线阶段
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod chunker;
pub mod commands;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod queries;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use chunker::TextChunker;

pub use commands::{
    handlers::{SynthesizeSpeechHandler, SynthesizeSpeechResponse},
    SynthesizeSpeech,
};

pub use error::ApplicationError;

pub use pipeline::PipelineStage;

pub use ports::{
    // Markup generator
    MarkupError,
    MarkupGeneratorPort,
    // Sentence splitter
    SentenceSplitterPort,
    SplitError,
    // Settings store
    SettingsError,
    SettingsStorePort,
    // Speech synthesizer
    SpeechRequest,
    SpeechSynthesizerPort,
    SynthesisError,
};

pub use queries::{handlers::GetSettingsHandler, GetSettings};
