//! Route modules for Filelink Server

pub mod files;
pub mod health;
pub mod stats;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/health", get(health::health_check))
        .nest("/api/v1/files", files::router())
        .nest("/api/v1/stats", stats::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::db::{create_pool, StatsStore};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    async fn test_app(dir: &TempDir) -> Router {
        let config = Config::from_lookup(|name| match name {
            "WORKER_URL" => Some("https://host.example/api/".to_string()),
            "HASH_LENGTH" => Some("10".to_string()),
            _ => None,
        })
        .unwrap();
        let url = format!("sqlite://{}", dir.path().join("app.db").display());
        let store = StatsStore::open(create_pool(&url).await.unwrap()).await.unwrap();
        app(AppState::new(config, store))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn video_event(message_id: i64, size: u64) -> Value {
        json!({
            "fileId": 77,
            "fileName": "trip.mp4",
            "fileSize": size,
            "mimeType": "video/mp4",
            "messageId": message_id,
        })
    }

    #[tokio::test]
    async fn test_health() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir).await;

        let (status, body) = send(&app, get("/api/v1/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["workerUrl"], "https://host.example/api");
    }

    #[tokio::test]
    async fn test_process_file_returns_link() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir).await;

        let (status, body) = send(&app, post_json("/api/v1/files", video_event(42, 2048))).await;
        assert_eq!(status, StatusCode::CREATED);

        let token = body["link"]["token"].as_str().unwrap();
        assert_eq!(token.len(), 10);
        assert_eq!(
            body["link"]["url"],
            format!("https://host.example/api/42/{}", token)
        );
        assert_eq!(body["statsRecorded"], true);
        assert_eq!(body["displayName"], "trip.mp4");
        assert_eq!(body["mediaKind"], "video");
    }

    #[tokio::test]
    async fn test_unsupported_media_is_rejected() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir).await;

        let mut event = video_event(1, 10);
        event["mimeType"] = json!("audio/mpeg");
        let (status, body) = send(&app, post_json("/api/v1/files", event)).await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"], "unsupported_media");
    }

    #[tokio::test]
    async fn test_verify_round_trip() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir).await;

        let (_, body) = send(&app, post_json("/api/v1/files", video_event(42, 2048))).await;
        let token = body["link"]["token"].as_str().unwrap().to_string();

        let uri = format!(
            "/api/v1/files/verify?messageId=42&token={}&fileId=77&fileName={}&fileSize=2048&mimeType={}",
            token,
            urlencoding::encode("trip.mp4"),
            urlencoding::encode("video/mp4"),
        );
        let (status, body) = send(&app, get(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);
        assert_eq!(body["url"], format!("https://host.example/api/42/{}", token));

        let tampered = format!(
            "/api/v1/files/verify?messageId=42&token={}&fileId=77&fileName={}&fileSize=2049&mimeType={}",
            token,
            urlencoding::encode("trip.mp4"),
            urlencoding::encode("video/mp4"),
        );
        let (_, body) = send(&app, get(&tampered)).await;
        assert_eq!(body["valid"], false);
        assert!(body.get("url").is_none());
    }

    #[tokio::test]
    async fn test_stats_endpoints() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir).await;

        let (_, body) = send(&app, get("/api/v1/stats")).await;
        assert_eq!(body["total"]["fileCount"], 0);
        assert_eq!(body["lastWeek"]["totalSize"], 0);

        for (id, size) in [(1, 1000), (2, 2000), (3, 500)] {
            send(&app, post_json("/api/v1/files", video_event(id, size))).await;
        }

        let (status, body) = send(&app, get("/api/v1/stats/total")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fileCount"], 3);
        assert_eq!(body["totalSize"], 3500);

        let (_, body) = send(&app, get("/api/v1/stats/history?limit=5")).await;
        let days = body.as_array().unwrap();
        assert!(!days.is_empty() && days.len() <= 2);

        let (status, body) = send(&app, get("/api/v1/stats/today")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["fileCount"].as_i64().unwrap() <= 3);

        let (status, _) = send(&app, get("/api/v1/stats/week")).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, get("/api/v1/stats/yesterday")).await;
        assert_eq!(status, StatusCode::OK);
    }
}
