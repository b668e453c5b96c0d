//! Gemini Markup Client - 调用 Gemini 生成 SSML
//!
//! 实现 MarkupGeneratorPort trait
//!
//! 外部 API:
//! POST {base_url}/v1beta/models/{model}:generateContent
//! Header: x-goog-api-key: {api_key}
//! Request: {"contents": [{"parts": [{"text": "..."}]}]}
//! Response: {"candidates": [{"content": {"parts": [{"text": "..."}]}}]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{MarkupError, MarkupGeneratorPort};

/// API Key 请求头，Key 不进入 URL
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini 客户端配置
#[derive(Debug, Clone)]
pub struct GeminiMarkupClientConfig {
    /// 服务基础 URL
    pub base_url: String,
    /// 模型名称
    pub model: String,
    /// API Key
    pub api_key: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for GeminiMarkupClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_key: String::new(),
            timeout_secs: 60,
        }
    }
}

impl GeminiMarkupClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

/// 构造标记生成提示词
fn build_prompt(text: &str) -> String {
    format!(
        "Convert the following text into SSML markup with appropriate prosody, emphasis, \
         and breaks based on the text's sentiment and meaning:\n{}\n\
         Return only the SSML markup without any explanation.",
        text
    )
}

/// Gemini 标记生成客户端
pub struct GeminiMarkupClient {
    client: Client,
    config: GeminiMarkupClientConfig,
}

impl GeminiMarkupClient {
    pub fn new(config: GeminiMarkupClientConfig) -> Result<Self, MarkupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MarkupError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl MarkupGeneratorPort for GeminiMarkupClient {
    async fn generate(&self, text: &str) -> Result<String, MarkupError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(text),
                }],
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            text_len = text.len(),
            "Sending markup generation request"
        );

        let response = self
            .client
            .post(self.generate_url())
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                if e.is_timeout() {
                    MarkupError::Timeout
                } else if e.is_connect() {
                    MarkupError::NetworkError(format!("Cannot connect to markup service: {}", e))
                } else {
                    MarkupError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(MarkupError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| {
                MarkupError::InvalidResponse(format!(
                    "Failed to parse response: {}",
                    e.without_url()
                ))
            })?;

        let candidate = parsed
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| MarkupError::InvalidResponse("No candidates returned".to_string()))?;

        let markup: String = candidate
            .content
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        if markup.is_empty() {
            return Err(MarkupError::InvalidResponse(format!(
                "Empty markup (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            )));
        }

        tracing::debug!(markup_len = markup.len(), "Markup generated");

        Ok(markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::POST;
    use httpmock::MockServer;

    const PATH: &str = "/v1beta/models/gemini-test:generateContent";

    fn client_for(server: &MockServer) -> GeminiMarkupClient {
        let config = GeminiMarkupClientConfig::new(server.base_url(), "test-key")
            .with_model("gemini-test")
            .with_timeout(5);
        GeminiMarkupClient::new(config).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = GeminiMarkupClientConfig::default();
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_prompt_embeds_text() {
        let prompt = build_prompt("It was a dark and stormy night.");
        assert!(prompt.contains("It was a dark and stormy night."));
        assert!(prompt.contains("Return only the SSML markup"));
    }

    #[tokio::test]
    async fn test_markup_returned_verbatim() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(PATH)
                    .header("x-goog-api-key", "test-key")
                    .body_contains("Good evening.");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(
                        serde_json::json!({
                            "candidates": [{
                                "content": {"parts": [
                                    {"text": "<speak>Good "},
                                    {"text": "<emphasis>evening</emphasis>.</speak>"}
                                ]},
                                "finishReason": "STOP"
                            }]
                        })
                        .to_string(),
                    );
            })
            .await;

        let markup = client_for(&server).generate("Good evening.").await.unwrap();

        mock.assert_async().await;
        assert_eq!(markup, "<speak>Good <emphasis>evening</emphasis>.</speak>");
    }

    #[tokio::test]
    async fn test_http_error_is_service_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(429).body("quota exhausted");
            })
            .await;

        let err = client_for(&server).generate("Hi.").await.unwrap_err();
        match err {
            MarkupError::ServiceError(msg) => assert!(msg.contains("quota exhausted")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blocked_prompt_is_invalid_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#);
            })
            .await;

        let err = client_for(&server).generate("Hi.").await.unwrap_err();
        match err {
            MarkupError::InvalidResponse(msg) => assert!(msg.contains("SAFETY")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_no_candidates_is_invalid_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"promptFeedback": {"blockReason": "OTHER"}}"#);
            })
            .await;

        let err = client_for(&server).generate("Hi.").await.unwrap_err();
        assert!(matches!(err, MarkupError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_connect_error_does_not_expose_api_key() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let config = GeminiMarkupClientConfig::new(base_url, "SUPERSECRETKEY").with_timeout(5);
        let err = GeminiMarkupClient::new(config)
            .unwrap()
            .generate("Hi.")
            .await
            .unwrap_err();

        assert!(matches!(err, MarkupError::NetworkError(_)));
        assert!(!err.to_string().contains("SUPERSECRETKEY"));
    }
}
