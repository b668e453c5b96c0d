//! Synthesize Commands

use crate::domain::VoiceSettingsPatch;

/// 合成语音命令
#[derive(Debug, Clone)]
pub struct SynthesizeSpeech {
    /// 待合成的原始文本
    pub text: String,
    /// 调用方提交的音色设置，覆盖已保存的设置
    pub settings: VoiceSettingsPatch,
}
