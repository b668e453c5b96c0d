//! Synthesize Command Handlers
//!
//! 分块合成流水线：合并并保存设置 → 分块 → 逐块生成标记、合成、追加音频

use std::sync::Arc;
use uuid::Uuid;

use crate::application::chunker::TextChunker;
use crate::application::commands::SynthesizeSpeech;
use crate::application::error::ApplicationError;
use crate::application::pipeline::PipelineStage;
use crate::application::ports::{
    MarkupGeneratorPort, SettingsStorePort, SpeechRequest, SpeechSynthesizerPort,
};
use crate::domain::{VoiceSettings, VoiceSettingsPatch};

/// 合成结果
#[derive(Debug, Clone)]
pub struct SynthesizeSpeechResponse {
    pub request_id: Uuid,
    /// 按块顺序拼接的完整音频
    pub audio_data: Vec<u8>,
    pub chunk_count: usize,
}

/// SynthesizeSpeech Handler
///
/// 块严格按顺序处理，第 i+1 块的标记生成在第 i 块音频追加之后才开始。
/// 不重试：任何外部调用失败都会终止整个请求。
pub struct SynthesizeSpeechHandler {
    settings_store: Arc<dyn SettingsStorePort>,
    chunker: Arc<TextChunker>,
    markup_generator: Arc<dyn MarkupGeneratorPort>,
    speech_synthesizer: Arc<dyn SpeechSynthesizerPort>,
}

impl SynthesizeSpeechHandler {
    pub fn new(
        settings_store: Arc<dyn SettingsStorePort>,
        chunker: Arc<TextChunker>,
        markup_generator: Arc<dyn MarkupGeneratorPort>,
        speech_synthesizer: Arc<dyn SpeechSynthesizerPort>,
    ) -> Self {
        Self {
            settings_store,
            chunker,
            markup_generator,
            speech_synthesizer,
        }
    }

    pub async fn handle(
        &self,
        command: SynthesizeSpeech,
    ) -> Result<SynthesizeSpeechResponse, ApplicationError> {
        let request_id = Uuid::new_v4();
        let text = command.text;
        let text_len = text.len();

        tracing::debug!(
            request_id = %request_id,
            stage = %PipelineStage::Received,
            text_len = text_len,
            settings = ?command.settings,
            "Received synthesis request"
        );

        if text.trim().is_empty() {
            return Err(ApplicationError::validation("No text provided"));
        }

        let settings = self.resolve_settings(command.settings).await?;
        tracing::debug!(
            request_id = %request_id,
            stage = %PipelineStage::SettingsResolved,
            settings = ?settings,
            "Settings resolved"
        );

        tracing::debug!(request_id = %request_id, stage = %PipelineStage::Splitting, "Splitting text");
        let chunks = self.chunker.chunk(&text);
        if chunks.iter().all(|c| c.trim().is_empty()) {
            tracing::warn!(
                request_id = %request_id,
                text_len = text_len,
                "No sentences found in text"
            );
            return Err(ApplicationError::validation("No text provided"));
        }
        let chunk_count = chunks.len();
        tracing::debug!(
            request_id = %request_id,
            chunk_count = chunk_count,
            max_bytes = self.chunker.max_bytes(),
            "Split into {} chunks",
            chunk_count
        );

        let mut combined: Vec<u8> = Vec::new();

        for (offset, chunk) in chunks.iter().enumerate() {
            let chunk_index = offset + 1;

            let stage = PipelineStage::GeneratingMarkup { chunk_index };
            tracing::debug!(
                request_id = %request_id,
                stage = %stage,
                chunk_len = chunk.len(),
                "Processing chunk {} of {}",
                chunk_index,
                chunk_count
            );
            let ssml = self.markup_generator.generate(chunk).await.map_err(|source| {
                tracing::error!(
                    request_id = %request_id,
                    stage = %stage,
                    text_len = text_len,
                    chunk_count = chunk_count,
                    settings = ?settings,
                    error = %source,
                    "Markup generation failed"
                );
                ApplicationError::MarkupGeneration {
                    chunk_index,
                    chunk_count,
                    source,
                }
            })?;

            let stage = PipelineStage::Synthesizing { chunk_index };
            tracing::debug!(
                request_id = %request_id,
                stage = %stage,
                ssml_len = ssml.len(),
                "Synthesizing chunk"
            );
            let audio = self
                .speech_synthesizer
                .synthesize(SpeechRequest::new(ssml, &settings))
                .await
                .map_err(|source| {
                    tracing::error!(
                        request_id = %request_id,
                        stage = %stage,
                        text_len = text_len,
                        chunk_count = chunk_count,
                        settings = ?settings,
                        error = %source,
                        "Speech synthesis failed"
                    );
                    ApplicationError::SpeechSynthesis {
                        chunk_index,
                        chunk_count,
                        source,
                    }
                })?;

            tracing::trace!(
                request_id = %request_id,
                stage = %PipelineStage::Appending { chunk_index },
                audio_size = audio.len(),
                "Appending chunk audio"
            );
            combined.extend_from_slice(&audio);
        }

        tracing::info!(
            request_id = %request_id,
            stage = %PipelineStage::Completed,
            text_len = text_len,
            chunk_count = chunk_count,
            audio_size = combined.len(),
            "Speech synthesized"
        );

        Ok(SynthesizeSpeechResponse {
            request_id,
            audio_data: combined,
            chunk_count,
        })
    }

    /// 合并调用方设置与已保存设置，并立即保存合并结果
    ///
    /// 保存发生在任何外部调用之前，后续失败也不回滚
    async fn resolve_settings(
        &self,
        patch: VoiceSettingsPatch,
    ) -> Result<VoiceSettings, ApplicationError> {
        let stored = self.settings_store.load().await?;
        let settings = patch.merged_over(&stored);
        settings.validate()?;
        self.settings_store.save(&settings).await?;
        Ok(settings)
    }
}
