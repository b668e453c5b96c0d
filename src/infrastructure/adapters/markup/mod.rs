//! Markup Adapter - SSML 生成客户端实现

mod gemini_client;

pub use gemini_client::{GeminiMarkupClient, GeminiMarkupClientConfig};
