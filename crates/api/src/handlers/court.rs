//! Handlers for courts: creation, listing, and the daily availability grid.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use courtside_core::booking::{availability, parse_date, SlotStatus};
use courtside_core::error::CoreError;
use courtside_core::types::DbId;
use courtside_db::models::court::{CourtSummary, CreateCourt};
use courtside_db::repositories::{BookingRepo, CourtRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::query::DateParams;
use crate::response::CourtCreated;
use crate::state::AppState;

/// Response body for the availability grid.
#[derive(Debug, Serialize)]
pub struct CourtAvailability {
    pub court_id: DbId,
    pub date: NaiveDate,
    pub slots: Vec<SlotStatus>,
}

/// POST /courts
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateCourt>,
) -> AppResult<(StatusCode, Json<CourtCreated>)> {
    let input = input.validate()?;
    let court = CourtRepo::create(&state.pool, &input).await?;
    tracing::info!(
        court_id = court.id,
        center_id = court.center_id,
        sport_id = court.sport_id,
        "Court created"
    );
    Ok((
        StatusCode::CREATED,
        Json(CourtCreated {
            message: "Court created successfully",
            court_id: court.id,
        }),
    ))
}

/// GET /centers/{center_id}/sports/{sport_id}/courts
pub async fn list_by_center_and_sport(
    State(state): State<AppState>,
    ApiPath((center_id, sport_id)): ApiPath<(DbId, DbId)>,
) -> AppResult<Json<Vec<CourtSummary>>> {
    let courts = CourtRepo::list_by_center_and_sport(&state.pool, center_id, sport_id).await?;
    Ok(Json(courts))
}

/// GET /courts/{court_id}/availability?date=YYYY-MM-DD
pub async fn availability_for_day(
    State(state): State<AppState>,
    ApiPath(court_id): ApiPath<DbId>,
    Query(params): Query<DateParams>,
) -> AppResult<Json<CourtAvailability>> {
    let date = parse_date(params.date.as_deref().unwrap_or_default())?;

    CourtRepo::find_by_id(&state.pool, court_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Court",
            id: court_id,
        }))?;

    let booked: Vec<_> = BookingRepo::list_for_court_on(&state.pool, court_id, date)
        .await?
        .into_iter()
        .map(|b| (b.booking_time, b.customer_name))
        .collect();
    let slots = availability(&state.config.opening_hours, date, &booked)?;

    Ok(Json(CourtAvailability {
        court_id,
        date,
        slots,
    }))
}
