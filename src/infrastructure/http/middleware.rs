//! HTTP Middleware
//!
//! 请求失败时的访问日志

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// 失败请求日志
///
/// 5xx（上游故障、设置存储故障）记为 error，4xx 记为 warn，附带耗时。
/// 错误消息本身由 `ApiError` 记录。
pub async fn log_failed_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match status.as_u16() {
        500..=599 => tracing::error!(
            %method,
            path = %uri.path(),
            status = status.as_u16(),
            elapsed_ms,
            "Request failed"
        ),
        400..=499 => tracing::warn!(
            %method,
            path = %uri.path(),
            status = status.as_u16(),
            elapsed_ms,
            "Request rejected"
        ),
        _ => {}
    }

    response
}
