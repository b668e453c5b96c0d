//! Persistence Layer - 数据持久化
//!
//! 音色设置的 JSON 文件存储

pub mod json_file;

pub use self::json_file::JsonFileSettingsStore;
