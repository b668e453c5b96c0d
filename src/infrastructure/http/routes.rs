//! HTTP Routes
//!
//! API Endpoints:
//! - /              GET   前端页面（静态目录下的 index.html）
//! - /static/*      GET   前端静态资源
//! - /get_settings  GET   获取当前音色设置
//! - /synthesize    POST  合成语音，返回 speech.mp3 附件

use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes(static_dir: &Path) -> Router<Arc<AppState>> {
    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .route("/get_settings", get(handlers::get_settings))
        .route("/synthesize", post(handlers::synthesize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    use crate::application::testing::{
        CallLog, FakeMarkupGenerator, FakeSpeechSynthesizer, PeriodSplitter,
    };
    use crate::application::TextChunker;
    use crate::infrastructure::memory::InMemorySettingsStore;

    struct TestApp {
        router: Router,
        log: CallLog,
        _static_dir: TempDir,
    }

    fn test_app(synthesizer: impl FnOnce(CallLog) -> FakeSpeechSynthesizer) -> TestApp {
        let static_dir = tempdir().unwrap();
        std::fs::write(static_dir.path().join("index.html"), "<html>prosody</html>").unwrap();

        let log = CallLog::default();
        let state = AppState::new(
            Arc::new(InMemorySettingsStore::new()),
            Arc::new(TextChunker::new(Arc::new(PeriodSplitter), 12)),
            Arc::new(FakeMarkupGenerator::new(log.clone())),
            Arc::new(synthesizer(log.clone())),
        );
        let router = create_routes(static_dir.path()).with_state(Arc::new(state));

        TestApp {
            router,
            log,
            _static_dir: static_dir,
        }
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_index_page_served() {
        let app = test_app(FakeSpeechSynthesizer::new);

        let response = app.router.oneshot(get("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"<html>prosody</html>".to_vec());
    }

    #[tokio::test]
    async fn test_get_settings_defaults() {
        let app = test_app(FakeSpeechSynthesizer::new);

        let response = app.router.oneshot(get("/get_settings")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "voice": "en-US-Studio-O",
                "language": "en-US",
                "speed": 1.0,
                "pitch": 0.0
            })
        );
    }

    #[tokio::test]
    async fn test_synthesize_returns_mp3_attachment() {
        let app = test_app(FakeSpeechSynthesizer::new);

        let response = app
            .router
            .oneshot(post_json(
                "/synthesize",
                serde_json::json!({"text": "One two. Three.", "settings": {}}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/mpeg");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"speech.mp3\""
        );
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(
            body_bytes(response).await,
            b"[<speak>One two.</speak>][<speak>Three.</speak>]".to_vec()
        );
    }

    #[tokio::test]
    async fn test_synthesize_empty_text_is_bad_request() {
        let app = test_app(FakeSpeechSynthesizer::new);

        let response = app
            .router
            .oneshot(post_json("/synthesize", serde_json::json!({"text": ""})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "No text provided"})
        );
        assert!(app.log.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_synthesize_missing_text_is_bad_request() {
        let app = test_app(FakeSpeechSynthesizer::new);

        let response = app
            .router
            .oneshot(post_json("/synthesize", serde_json::json!({"settings": {}})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_synthesize_malformed_json_is_bad_request() {
        let app = test_app(FakeSpeechSynthesizer::new);
        let request = Request::builder()
            .method("POST")
            .uri("/synthesize")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"text\": "))
            .unwrap();

        let response = app.router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await.get("error").is_some());
    }

    #[tokio::test]
    async fn test_synthesize_upstream_failure_returns_error_without_audio() {
        let app = test_app(|log| FakeSpeechSynthesizer::failing_at(log, 1));

        let response = app
            .router
            .clone()
            .oneshot(post_json(
                "/synthesize",
                serde_json::json!({"text": "One two. Three. Four five."}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("chunk 1/3"));
        assert_eq!(app.log.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_submitted_settings_are_persisted() {
        let app = test_app(FakeSpeechSynthesizer::new);
        let submitted = serde_json::json!({
            "voice": "en-AU-Neural2-B",
            "language": "en-AU",
            "speed": 1.2,
            "pitch": -4.0
        });

        let response = app
            .router
            .clone()
            .oneshot(post_json(
                "/synthesize",
                serde_json::json!({"text": "G'day.", "settings": submitted.clone()}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.router.oneshot(get("/get_settings")).await.unwrap();
        assert_eq!(body_json(response).await, submitted);
    }
}
