//! HTTP-level integration tests for the catalog endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, post_raw, seed_venue};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Centers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_center_returns_201_with_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/centers",
        serde_json::json!({"name": "Riverside", "location": "Harbour Road"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Center created successfully");
    assert!(json["center_id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_center_without_location_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/centers", serde_json::json!({"name": "Riverside"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Missing required fields: location");

    let app = common::build_test_app(pool);
    let listed = body_json(get(app, "/centers").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_center_with_nul_in_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/centers",
        serde_json::json!({"name": "A\u{0}B", "location": "x"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["message"], "name must not contain control characters");

    let app = common::build_test_app(pool);
    let listed = body_json(get(app, "/centers").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_json_body_returns_json_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/centers", "{\"name\": \"Riverside\",").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["message"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_path_id_returns_json_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/centers/riverside/sports").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_centers_returns_id_name_location(pool: PgPool) {
    seed_venue(&pool, "Riverside", "Tennis", "Court 1").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/centers").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let centers = json.as_array().unwrap();
    assert_eq!(centers.len(), 1);
    assert_eq!(centers[0]["name"], "Riverside");
    assert_eq!(centers[0]["location"], "Harbour Road");
    assert!(centers[0]["id"].is_number());
}

// ---------------------------------------------------------------------------
// Sports
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_sports_of_center(pool: PgPool) {
    let venue = seed_venue(&pool, "Riverside", "Tennis", "Court 1").await;
    seed_venue(&pool, "Hilltop", "Squash", "Court A").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/centers/{}/sports", venue.center_id)).await).await;

    assert_eq!(
        json,
        serde_json::json!([{"id": venue.sport_id, "name": "Tennis"}])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_sports_of_unknown_center_is_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/centers/999999/sports").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_sport_missing_fields_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/sports", serde_json::json!({"name": "  "})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required fields: name, center_id");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_sport_for_unknown_center_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/sports",
        serde_json::json!({"name": "Tennis", "center_id": 424242}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "center_id does not reference an existing center");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sports")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_sport_accepts_string_center_id(pool: PgPool) {
    let venue = seed_venue(&pool, "Riverside", "Tennis", "Court 1").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/sports",
        serde_json::json!({"name": "Padel", "center_id": venue.center_id.to_string()}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_json(response).await["sport_id"].is_number());
}

// ---------------------------------------------------------------------------
// Courts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_courts_of_center_and_sport(pool: PgPool) {
    let venue = seed_venue(&pool, "Riverside", "Tennis", "Court 1").await;

    let app = common::build_test_app(pool);
    let uri = format!(
        "/centers/{}/sports/{}/courts",
        venue.center_id, venue.sport_id
    );
    let json = body_json(get(app, &uri).await).await;

    assert_eq!(
        json,
        serde_json::json!([{"id": venue.court_id, "name": "Court 1"}])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_court_missing_sport_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/courts",
        serde_json::json!({"name": "Court 9", "center_id": 1}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Missing required fields: sport_id"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_court_with_foreign_sport_is_rejected(pool: PgPool) {
    let riverside = seed_venue(&pool, "Riverside", "Tennis", "Court 1").await;
    let hilltop = seed_venue(&pool, "Hilltop", "Squash", "Court A").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/courts",
        serde_json::json!({
            "name": "Court 2",
            "center_id": riverside.center_id,
            "sport_id": hilltop.sport_id,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "sport_id does not reference a sport offered at this center"
    );
}
