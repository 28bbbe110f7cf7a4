//! Handlers for sports: creation at `/sports`, listing under a center.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use courtside_core::types::DbId;
use courtside_db::models::sport::{CreateSport, SportSummary};
use courtside_db::repositories::SportRepo;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::response::SportCreated;
use crate::state::AppState;

/// POST /sports
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateSport>,
) -> AppResult<(StatusCode, Json<SportCreated>)> {
    let input = input.validate()?;
    let sport = SportRepo::create(&state.pool, &input).await?;
    tracing::info!(sport_id = sport.id, center_id = sport.center_id, "Sport created");
    Ok((
        StatusCode::CREATED,
        Json(SportCreated {
            message: "Sport created successfully",
            sport_id: sport.id,
        }),
    ))
}

/// GET /centers/{center_id}/sports
pub async fn list_by_center(
    State(state): State<AppState>,
    ApiPath(center_id): ApiPath<DbId>,
) -> AppResult<Json<Vec<SportSummary>>> {
    let sports = SportRepo::list_by_center(&state.pool, center_id).await?;
    Ok(Json(sports))
}
