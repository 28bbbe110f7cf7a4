//! Readiness probe for load balancers and the deploy pipeline.
//!
//! The service is only useful when the store answers and carries every
//! migration this binary was built with; anything less reports `degraded`
//! with 503 so traffic is held back.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub store: StoreHealth,
}

#[derive(Debug, Serialize)]
pub struct StoreHealth {
    pub reachable: bool,
    /// Newest migration applied to the store.
    pub schema_version: Option<i64>,
    /// Newest migration embedded in this build.
    pub expected_schema_version: Option<i64>,
}

impl StoreHealth {
    fn is_ready(&self) -> bool {
        self.reachable
            && self.schema_version.is_some()
            && self.schema_version >= self.expected_schema_version
    }
}

/// GET /health
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let expected_schema_version = courtside_db::expected_schema_version();

    let store = match courtside_db::applied_schema_version(&state.pool).await {
        Ok(schema_version) => StoreHealth {
            reachable: true,
            schema_version,
            expected_schema_version,
        },
        Err(err) => {
            tracing::warn!(error = %err, "Store health probe failed");
            StoreHealth {
                reachable: courtside_db::health_check(&state.pool).await.is_ok(),
                schema_version: None,
                expected_schema_version,
            }
        }
    };

    let (code, status) = if store.is_ready() {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthReport {
            status,
            version: env!("CARGO_PKG_VERSION"),
            store,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
