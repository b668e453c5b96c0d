//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;
use crate::domain::DEFAULT_MAX_CHUNK_BYTES;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `PROSODY_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `PROSODY_SERVER__PORT=8080`
/// - `PROSODY_MARKUP__API_KEY=...`
/// - `PROSODY_TTS__API_KEY=...`
/// - `PROSODY_SETTINGS__PATH=/data/settings.json`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5060)?
        .set_default("server.static_files.dir", "web")?
        .set_default("pipeline.max_chunk_bytes", DEFAULT_MAX_CHUNK_BYTES as u64)?
        .set_default("markup.base_url", "https://generativelanguage.googleapis.com")?
        .set_default("markup.model", "gemini-1.5-flash")?
        .set_default("markup.api_key", "")?
        .set_default("markup.timeout_secs", 60)?
        .set_default("tts.base_url", "https://texttospeech.googleapis.com")?
        .set_default("tts.api_key", "")?
        .set_default("tts.timeout_secs", 60)?
        .set_default("settings.path", "settings.json")?
        .set_default("log.level", "info")?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: PROSODY_TTS__API_KEY=xxx
    builder = builder.add_source(
        Environment::with_prefix("PROSODY")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.pipeline.max_chunk_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "Max chunk bytes cannot be 0".to_string(),
        ));
    }

    if config.markup.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Markup service URL cannot be empty".to_string(),
        ));
    }

    if config.tts.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS service URL cannot be empty".to_string(),
        ));
    }

    if config.settings.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Settings path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志），不输出 API Key
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Static Files: {:?}", config.server.static_files.dir);
    tracing::info!("Max Chunk Bytes: {}", config.pipeline.max_chunk_bytes);
    tracing::info!("Markup URL: {}", config.markup.base_url);
    tracing::info!("Markup Model: {}", config.markup.model);
    tracing::info!("Markup API Key Set: {}", !config.markup.api_key.is_empty());
    tracing::info!("TTS URL: {}", config.tts.base_url);
    tracing::info!("TTS API Key Set: {}", !config.tts.api_key.is_empty());
    tracing::info!("Settings File: {:?}", config.settings.path);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
