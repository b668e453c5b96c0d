//! Application State
//!
//! 持有所有 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    SynthesizeSpeechHandler,
    // Query handlers
    GetSettingsHandler,
    // Ports
    MarkupGeneratorPort, SettingsStorePort, SpeechSynthesizerPort, TextChunker,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub synthesize_handler: SynthesizeSpeechHandler,

    // ========== Query Handlers ==========
    pub get_settings_handler: GetSettingsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        settings_store: Arc<dyn SettingsStorePort>,
        chunker: Arc<TextChunker>,
        markup_generator: Arc<dyn MarkupGeneratorPort>,
        speech_synthesizer: Arc<dyn SpeechSynthesizerPort>,
    ) -> Self {
        Self {
            // Command handlers
            synthesize_handler: SynthesizeSpeechHandler::new(
                settings_store.clone(),
                chunker,
                markup_generator,
                speech_synthesizer,
            ),

            // Query handlers
            get_settings_handler: GetSettingsHandler::new(settings_store),
        }
    }
}
