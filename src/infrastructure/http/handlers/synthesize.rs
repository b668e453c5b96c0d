//! Synthesize Handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderName},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::application::SynthesizeSpeech;
use crate::infrastructure::http::dto::SynthesizeRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 下载文件名
pub const AUDIO_FILE_NAME: &str = "speech.mp3";

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// 合成语音，成功时以附件形式返回完整 MP3
pub async fn synthesize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SynthesizeRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;

    let command = SynthesizeSpeech {
        text: req.text,
        settings: req.settings.unwrap_or_default(),
    };

    let result = state.synthesize_handler.handle(command).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "audio/mpeg".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", AUDIO_FILE_NAME),
            ),
            (REQUEST_ID_HEADER, result.request_id.to_string()),
        ],
        result.audio_data,
    )
        .into_response())
}
