//! Google TTS Client - 调用 Google Cloud Text-to-Speech
//!
//! 实现 SpeechSynthesizerPort trait
//!
//! 外部 API:
//! POST {base_url}/v1/text:synthesize
//! Header: x-goog-api-key: {api_key}
//! Request: {"input": {"ssml": "..."}, "voice": {...}, "audioConfig": {...}}  (JSON)
//! Response: {"audioContent": "<base64 MP3>"}

use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{SpeechRequest, SpeechSynthesizerPort, SynthesisError};

/// 输出编码，MP3 帧可直接按字节拼接
const AUDIO_ENCODING: &str = "MP3";

/// API Key 请求头，Key 不进入 URL
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeHttpRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelectionParams<'a>,
    audio_config: AudioConfig,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    ssml: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelectionParams<'a> {
    language_code: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
    speaking_rate: f64,
    pitch: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeHttpResponse {
    audio_content: String,
}

/// Google TTS 客户端配置
#[derive(Debug, Clone)]
pub struct GoogleTtsClientConfig {
    /// 服务基础 URL
    pub base_url: String,
    /// API Key
    pub api_key: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for GoogleTtsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://texttospeech.googleapis.com".to_string(),
            api_key: String::new(),
            timeout_secs: 60,
        }
    }
}

impl GoogleTtsClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Google TTS 客户端
pub struct GoogleTtsClient {
    client: Client,
    config: GoogleTtsClientConfig,
}

impl GoogleTtsClient {
    pub fn new(config: GoogleTtsClientConfig) -> Result<Self, SynthesisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SynthesisError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn synthesize_url(&self) -> String {
        format!(
            "{}/v1/text:synthesize",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl SpeechSynthesizerPort for GoogleTtsClient {
    async fn synthesize(&self, request: SpeechRequest) -> Result<Vec<u8>, SynthesisError> {
        let body = SynthesizeHttpRequest {
            input: SynthesisInput {
                ssml: &request.ssml,
            },
            voice: VoiceSelectionParams {
                language_code: &request.language_code,
                name: &request.voice_name,
            },
            audio_config: AudioConfig {
                audio_encoding: AUDIO_ENCODING,
                speaking_rate: request.speaking_rate,
                pitch: request.pitch,
            },
        };

        tracing::debug!(
            url = %self.synthesize_url(),
            ssml_len = request.ssml.len(),
            voice = %request.voice_name,
            language = %request.language_code,
            "Sending TTS synthesize request"
        );

        let response = self
            .client
            .post(self.synthesize_url())
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                if e.is_timeout() {
                    SynthesisError::Timeout
                } else if e.is_connect() {
                    SynthesisError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    SynthesisError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SynthesisError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let parsed: SynthesizeHttpResponse = response.json().await.map_err(|e| {
            SynthesisError::InvalidResponse(format!(
                "Failed to parse response: {}",
                e.without_url()
            ))
        })?;

        let audio_data = base64::engine::general_purpose::STANDARD
            .decode(parsed.audio_content.as_bytes())
            .map_err(|e| SynthesisError::InvalidResponse(format!("Invalid audio content: {}", e)))?;

        tracing::debug!(audio_size = audio_data.len(), "TTS synthesis completed");

        Ok(audio_data)
    }
}
