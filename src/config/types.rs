//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::DEFAULT_MAX_CHUNK_BYTES;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 流水线配置
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// SSML 生成服务配置
    #[serde(default)]
    pub markup: MarkupConfig,

    /// TTS 服务配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 设置存储配置
    #[serde(default)]
    pub settings: SettingsConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 静态文件服务配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

/// 静态文件服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 静态文件目录，`/` 返回其中的 index.html
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("web")
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5060
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 流水线配置
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// 单块最大字节数（UTF-8）
    #[serde(default = "default_max_chunk_bytes")]
    pub max_chunk_bytes: usize,
}

fn default_max_chunk_bytes() -> usize {
    DEFAULT_MAX_CHUNK_BYTES
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_chunk_bytes: default_max_chunk_bytes(),
        }
    }
}

/// SSML 生成服务配置（Gemini）
#[derive(Debug, Clone, Deserialize)]
pub struct MarkupConfig {
    /// 服务基础 URL
    #[serde(default = "default_markup_url")]
    pub base_url: String,

    /// 模型名称
    #[serde(default = "default_markup_model")]
    pub model: String,

    /// API Key
    #[serde(default)]
    pub api_key: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_markup_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_markup_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_timeout() -> u64 {
    60
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            base_url: default_markup_url(),
            model: default_markup_model(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

/// TTS 服务配置（Google Cloud Text-to-Speech）
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// 服务基础 URL
    #[serde(default = "default_tts_url")]
    pub base_url: String,

    /// API Key
    #[serde(default)]
    pub api_key: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_tts_url() -> String {
    "https://texttospeech.googleapis.com".to_string()
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            base_url: default_tts_url(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

/// 设置存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsConfig {
    /// 设置 JSON 文件路径
    #[serde(default = "default_settings_path")]
    pub path: PathBuf,
}

fn default_settings_path() -> PathBuf {
    PathBuf::from("settings.json")
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            path: default_settings_path(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
