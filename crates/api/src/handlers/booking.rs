//! Handlers for the `/bookings` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use courtside_core::booking::format_slot;
use courtside_core::error::CoreError;
use courtside_db::models::booking::{BookingListParams, BookingWithCourt, CreateBooking};
use courtside_db::repositories::BookingRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::response::BookingCreated;
use crate::state::AppState;

/// GET /bookings?center_id=&sport_id=&date=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<BookingListParams>,
) -> AppResult<Json<Vec<BookingWithCourt>>> {
    let filter = params.validate()?;
    let bookings = BookingRepo::list_for_day(&state.pool, &filter).await?;
    Ok(Json(bookings))
}

/// POST /bookings
///
/// The slot check and the insert are one statement; a taken slot is reported
/// as `SLOT_ALREADY_BOOKED` and nothing is written.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateBooking>,
) -> AppResult<(StatusCode, Json<BookingCreated>)> {
    let input = input.validate()?;

    let Some(booking) = BookingRepo::create(&state.pool, &input).await? else {
        tracing::warn!(
            court_id = input.court_id,
            booking_time = %format_slot(input.booking_time),
            "Slot already booked"
        );
        return Err(AppError::Core(CoreError::SlotAlreadyBooked));
    };

    tracing::info!(
        booking_id = booking.id,
        court_id = booking.court_id,
        booking_time = %format_slot(booking.booking_time),
        "Booking created"
    );
    Ok((
        StatusCode::CREATED,
        Json(BookingCreated {
            message: "Booking created successfully",
            booking_id: booking.id,
        }),
    ))
}
