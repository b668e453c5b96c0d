//! Voice Settings - 音色设置值对象
//!
//! 最近一次使用的合成参数，序列化字段名与前端约定一致：
//! `{voice, language, speed, pitch}`

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub const DEFAULT_VOICE: &str = "en-US-Studio-O";
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_SPEED: f64 = 1.0;
pub const DEFAULT_PITCH: f64 = 0.0;

/// 音色设置校验错误
#[derive(Debug, Error, PartialEq)]
pub enum VoiceSettingsError {
    #[error("Speaking rate must be a positive number, got {0}")]
    InvalidSpeed(f64),

    #[error("Pitch must be a finite number, got {0}")]
    InvalidPitch(f64),
}

/// 音色设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSettings {
    /// 音色名称，如 `en-US-Studio-O`
    pub voice: String,
    /// 语言代码，如 `en-US`
    pub language: String,
    /// 语速倍率
    pub speed: f64,
    /// 音高（半音）
    pub pitch: f64,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            voice: DEFAULT_VOICE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            speed: DEFAULT_SPEED,
            pitch: DEFAULT_PITCH,
        }
    }
}

impl VoiceSettings {
    /// 校验数值范围
    ///
    /// 具体取值范围由合成服务决定，这里只拦截明显无效的值
    pub fn validate(&self) -> Result<(), VoiceSettingsError> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(VoiceSettingsError::InvalidSpeed(self.speed));
        }
        if !self.pitch.is_finite() {
            return Err(VoiceSettingsError::InvalidPitch(self.pitch));
        }
        Ok(())
    }
}

/// 调用方提交的音色设置
///
/// 每个字段都可缺省，缺省字段沿用已保存的设置。
/// `speed` / `pitch` 同时接受数字和数字字符串（表单提交时常见）。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VoiceSettingsPatch {
    #[serde(default)]
    pub voice: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "number_or_string")]
    pub speed: Option<f64>,

    #[serde(default, deserialize_with = "number_or_string")]
    pub pitch: Option<f64>,
}

impl VoiceSettingsPatch {
    /// 以 `base` 为底合并，出现的字段一律覆盖
    pub fn merged_over(self, base: &VoiceSettings) -> VoiceSettings {
        VoiceSettings {
            voice: self.voice.unwrap_or_else(|| base.voice.clone()),
            language: self.language.unwrap_or_else(|| base.language.clone()),
            speed: self.speed.unwrap_or(base.speed),
            pitch: self.pitch.unwrap_or(base.pitch),
        }
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Number(f64),
        Text(String),
    }

    match Option::<Lenient>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Lenient::Number(n)) => Ok(Some(n)),
        Some(Lenient::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid number: {:?}", s))),
    }
}
