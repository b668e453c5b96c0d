//! Domain Layer - 领域层
//!
//! - voice_settings: 音色设置值对象
//! - chunking: 句子到合成块的拼装规则

mod chunking;
pub mod voice_settings;

pub use chunking::{build_chunks, truncate_to_bytes, DEFAULT_MAX_CHUNK_BYTES};
pub use voice_settings::{VoiceSettings, VoiceSettingsError, VoiceSettingsPatch};
