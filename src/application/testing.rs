//! 测试用端口实现

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::application::ports::{
    MarkupError, MarkupGeneratorPort, SentenceSplitterPort, SpeechRequest,
    SpeechSynthesizerPort, SplitError, SynthesisError,
};

/// 外部调用记录，标记生成记为 `markup:<text>`，合成记为 `synth:<ssml>`
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// 按句末标点切分的简单分句器
pub struct PeriodSplitter;

impl SentenceSplitterPort for PeriodSplitter {
    fn split(&self, text: &str) -> Result<Vec<String>, SplitError> {
        let mut sentences = Vec::new();
        let mut current = String::new();

        for ch in text.chars() {
            current.push(ch);
            if matches!(ch, '.' | '!' | '?' | '。') {
                let trimmed = current.trim();
                if !trimmed.is_empty() {
                    sentences.push(trimmed.to_string());
                }
                current.clear();
            }
        }

        let trimmed = current.trim();
        if !trimmed.is_empty() {
            sentences.push(trimmed.to_string());
        }

        Ok(sentences)
    }
}

pub struct FakeMarkupGenerator {
    log: CallLog,
    fail_at: Option<usize>,
    calls: Mutex<usize>,
}

impl FakeMarkupGenerator {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            fail_at: None,
            calls: Mutex::new(0),
        }
    }

    /// 第 `call` 次调用（从 1 开始）返回错误
    pub fn failing_at(log: CallLog, call: usize) -> Self {
        Self {
            fail_at: Some(call),
            ..Self::new(log)
        }
    }
}

#[async_trait]
impl MarkupGeneratorPort for FakeMarkupGenerator {
    async fn generate(&self, text: &str) -> Result<String, MarkupError> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            *calls
        };
        self.log.lock().unwrap().push(format!("markup:{}", text));

        if self.fail_at == Some(call) {
            return Err(MarkupError::ServiceError("quota exceeded".to_string()));
        }
        Ok(format!("<speak>{}</speak>", text))
    }
}

pub struct FakeSpeechSynthesizer {
    log: CallLog,
    fail_at: Option<usize>,
    requests: Mutex<Vec<SpeechRequest>>,
}

impl FakeSpeechSynthesizer {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            fail_at: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 第 `call` 次调用（从 1 开始）返回错误
    pub fn failing_at(log: CallLog, call: usize) -> Self {
        Self {
            fail_at: Some(call),
            ..Self::new(log)
        }
    }

    pub fn requests(&self) -> Vec<SpeechRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizerPort for FakeSpeechSynthesizer {
    async fn synthesize(&self, request: SpeechRequest) -> Result<Vec<u8>, SynthesisError> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len()
        };
        self.log.lock().unwrap().push(format!("synth:{}", request.ssml));

        if self.fail_at == Some(call) {
            return Err(SynthesisError::ServiceError("HTTP 500: backend error".to_string()));
        }
        Ok(format!("[{}]", request.ssml).into_bytes())
    }
}
