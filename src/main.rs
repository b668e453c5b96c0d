//! Prosody - SSML 语音合成服务
//!
//! 文本 → 分句分块 → Gemini 生成 SSML → Google TTS 合成 → 拼接 MP3

use std::sync::Arc;

use prosody::application::TextChunker;
use prosody::config::{load_config, print_config};
use prosody::infrastructure::adapters::{
    GeminiMarkupClient, GeminiMarkupClientConfig, GoogleTtsClient, GoogleTtsClientConfig,
    PragmaticSentenceSplitter,
};
use prosody::infrastructure::http::{AppState, HttpServer, ServerConfig};
use prosody::infrastructure::persistence::JsonFileSettingsStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},prosody={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Prosody - SSML 语音合成服务");
    print_config(&config);

    if config.markup.api_key.is_empty() || config.tts.api_key.is_empty() {
        tracing::warn!("API key missing for markup or TTS service, synthesis requests will fail");
    }

    // 设置存储
    let settings_store = Arc::new(JsonFileSettingsStore::new(&config.settings.path));

    // 分块器
    let chunker = Arc::new(TextChunker::new(
        Arc::new(PragmaticSentenceSplitter::new()),
        config.pipeline.max_chunk_bytes,
    ));

    // SSML 生成客户端
    let markup_config = GeminiMarkupClientConfig::new(&config.markup.base_url, &config.markup.api_key)
        .with_model(&config.markup.model)
        .with_timeout(config.markup.timeout_secs);
    let markup_generator = Arc::new(GeminiMarkupClient::new(markup_config)?);

    // TTS 客户端
    let tts_config = GoogleTtsClientConfig::new(&config.tts.base_url, &config.tts.api_key)
        .with_timeout(config.tts.timeout_secs);
    let speech_synthesizer = Arc::new(GoogleTtsClient::new(tts_config)?);

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_static_dir(&config.server.static_files.dir);
    let state = AppState::new(settings_store, chunker, markup_generator, speech_synthesizer);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
