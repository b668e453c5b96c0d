//! HTTP Error Handling
//!
//! 失败响应统一为 `{"error": "..."}`，配合对应的 HTTP 状态码

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
    /// 上游标记生成或语音合成服务失败
    BadGateway(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = %status.as_u16(), error = %msg, "Bad request");
                msg
            }
            ApiError::Internal(msg) => {
                tracing::error!(status = %status.as_u16(), error = %msg, "Internal server error");
                msg
            }
            ApiError::BadGateway(msg) => {
                tracing::error!(status = %status.as_u16(), error = %msg, "Upstream service error");
                msg
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            e @ (ApplicationError::MarkupGeneration { .. }
            | ApplicationError::SpeechSynthesis { .. }) => ApiError::BadGateway(e.to_string()),
            ApplicationError::StorageError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
