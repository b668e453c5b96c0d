//! Prosody - SSML 语音合成服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - VoiceSettings: 音色设置值对象
//! - Chunking: 按字节预算拼装句子
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SentenceSplitter, MarkupGenerator, SpeechSynthesizer, SettingsStore）
//! - Commands: 分块合成流水线
//! - Queries: 设置查询
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: Web API + 静态页面
//! - Adapters: 分句器、Gemini 客户端、Google TTS 客户端
//! - Persistence: 设置 JSON 文件
//! - Memory: 内存设置存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
