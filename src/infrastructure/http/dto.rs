//! Data Transfer Objects

use serde::Deserialize;

use crate::domain::VoiceSettingsPatch;

/// POST /synthesize 请求体
#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub settings: Option<VoiceSettingsPatch>,
}
