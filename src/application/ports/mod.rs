//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod markup_generator;
mod sentence_splitter;
mod settings_store;
mod speech_synthesizer;

pub use markup_generator::{MarkupError, MarkupGeneratorPort};
pub use sentence_splitter::{SentenceSplitterPort, SplitError};
pub use settings_store::{SettingsError, SettingsStorePort};
pub use speech_synthesizer::{SpeechRequest, SpeechSynthesizerPort, SynthesisError};
