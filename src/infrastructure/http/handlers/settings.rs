//! Settings Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GetSettings;
use crate::domain::VoiceSettings;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取最近一次使用的音色设置
pub async fn get_settings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<VoiceSettings>, ApiError> {
    let settings = state.get_settings_handler.handle(GetSettings).await?;
    Ok(Json(settings))
}
