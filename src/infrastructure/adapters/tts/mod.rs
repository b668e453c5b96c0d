//! TTS Adapter - 语音合成客户端实现

mod google_tts_client;

pub use google_tts_client::{GoogleTtsClient, GoogleTtsClientConfig};
