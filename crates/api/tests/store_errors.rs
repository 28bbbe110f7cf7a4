//! Store failures surface as 503 `STORE_UNAVAILABLE` without leaking detail.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{body_json, get};
use courtside_api::error::AppError;
use courtside_db::{create_pool_with, PoolSettings};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_statement_timeout_maps_to_503(
    _pool_opts: PgPoolOptions,
    connect_opts: PgConnectOptions,
) {
    let settings = PoolSettings {
        max_connections: 2,
        statement_timeout: Duration::from_millis(100),
        ..PoolSettings::default()
    };
    let pool = create_pool_with(connect_opts, &settings).await.unwrap();

    let err = sqlx::query("SELECT pg_sleep(1)")
        .execute(&pool)
        .await
        .unwrap_err();
    let response = AppError::Database(err).into_response();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["code"], "STORE_UNAVAILABLE");
    assert_eq!(json["message"], "The booking store is temporarily unavailable");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_closed_pool_maps_to_503_on_listing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    pool.close().await;

    let response = get(app, "/centers").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["code"], "STORE_UNAVAILABLE");
}
