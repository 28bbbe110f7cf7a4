#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use courtside_core::booking::OpeningHours;
use courtside_db::PoolSettings;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use courtside_api::config::{LogFormat, ServerConfig};
use courtside_api::router::build_app_router;
use courtside_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 30-second request timeout. The database URL is unused because
/// tests hand in a ready pool.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_url: "postgres://unused".to_string(),
        pool: PoolSettings::default(),
        opening_hours: OpeningHours::default(),
        log_format: LogFormat::Text,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an arbitrary body labelled as JSON, for malformed-payload tests.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Ids of a freshly created center, sport, and court.
pub struct Venue {
    pub center_id: i64,
    pub sport_id: i64,
    pub court_id: i64,
}

/// Create center -> sport -> court through the HTTP API.
pub async fn seed_venue(pool: &PgPool, center: &str, sport: &str, court: &str) -> Venue {
    let response = post_json(
        build_test_app(pool.clone()),
        "/centers",
        serde_json::json!({"name": center, "location": "Harbour Road"}),
    )
    .await;
    let center_id = body_json(response).await["center_id"].as_i64().unwrap();

    let response = post_json(
        build_test_app(pool.clone()),
        "/sports",
        serde_json::json!({"name": sport, "center_id": center_id}),
    )
    .await;
    let sport_id = body_json(response).await["sport_id"].as_i64().unwrap();

    let response = post_json(
        build_test_app(pool.clone()),
        "/courts",
        serde_json::json!({"name": court, "center_id": center_id, "sport_id": sport_id}),
    )
    .await;
    let court_id = body_json(response).await["court_id"].as_i64().unwrap();

    Venue {
        center_id,
        sport_id,
        court_id,
    }
}

pub async fn booking_count(pool: &PgPool) -> i64 {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookings")
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}
