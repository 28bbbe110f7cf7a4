//! Handlers for the `/centers` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use courtside_db::models::center::{Center, CreateCenter};
use courtside_db::repositories::CenterRepo;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::CenterCreated;
use crate::state::AppState;

/// POST /centers
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateCenter>,
) -> AppResult<(StatusCode, Json<CenterCreated>)> {
    let input = input.validate()?;
    let center = CenterRepo::create(&state.pool, &input).await?;
    tracing::info!(center_id = center.id, name = %center.name, "Center created");
    Ok((
        StatusCode::CREATED,
        Json(CenterCreated {
            message: "Center created successfully",
            center_id: center.id,
        }),
    ))
}

/// GET /centers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Center>>> {
    let centers = CenterRepo::list(&state.pool).await?;
    Ok(Json(centers))
}
