//! Repository for the `bookings` table.
//!
//! Slot uniqueness is enforced by `uq_bookings_court_slot`; the insert and
//! the conflict check are one statement, so concurrent requests for the same
//! slot cannot both succeed.

use chrono::NaiveDate;
use courtside_core::booking::day_bounds;
use courtside_core::error::CoreError;
use courtside_core::types::{DbId, SlotTime};
use sqlx::PgPool;

use crate::models::booking::{Booking, BookingDayFilter, BookingWithCourt, NewBooking};

const COLUMNS: &str =
    "id, court_id, center_id, sport_id, booking_time, customer_name, created_at";

/// Name of the unique constraint that guards a (court, hour) slot.
pub const SLOT_CONSTRAINT: &str = "uq_bookings_court_slot";

/// Failure modes of [`BookingRepo::list_for_day`] and
/// [`BookingRepo::list_for_court_on`].
#[derive(Debug, thiserror::Error)]
pub enum BookingQueryError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Provides reservation operations.
pub struct BookingRepo;

impl BookingRepo {
    /// Reserve a slot.
    ///
    /// Returns `Ok(None)` when the (court, hour) slot is already taken; the
    /// existing booking is left untouched.
    pub async fn create(pool: &PgPool, input: &NewBooking) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (court_id, center_id, sport_id, booking_time, customer_name)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT ON CONSTRAINT {SLOT_CONSTRAINT} DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.court_id)
            .bind(input.center_id)
            .bind(input.sport_id)
            .bind(input.booking_time)
            .bind(&input.customer_name)
            .fetch_optional(pool)
            .await
    }

    /// Find the booking occupying a slot, if any.
    pub async fn find_by_slot(
        pool: &PgPool,
        court_id: DbId,
        booking_time: SlotTime,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings WHERE court_id = $1 AND booking_time = $2"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(court_id)
            .bind(booking_time)
            .fetch_optional(pool)
            .await
    }

    /// Bookings for a center and sport on one calendar day, with court names.
    pub async fn list_for_day(
        pool: &PgPool,
        filter: &BookingDayFilter,
    ) -> Result<Vec<BookingWithCourt>, BookingQueryError> {
        let (start, end) = day_bounds(filter.date)?;
        let rows = sqlx::query_as::<_, BookingWithCourt>(
            "SELECT b.id, b.court_id, b.center_id, b.sport_id, b.booking_time,
                    b.customer_name, b.created_at, c.name AS court_name
             FROM bookings b
             JOIN courts c ON c.id = b.court_id
             WHERE b.center_id = $1 AND b.sport_id = $2
               AND b.booking_time >= $3 AND b.booking_time < $4
             ORDER BY b.booking_time, b.court_id",
        )
        .bind(filter.center_id)
        .bind(filter.sport_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Bookings on one court for one calendar day, in slot order.
    pub async fn list_for_court_on(
        pool: &PgPool,
        court_id: DbId,
        date: NaiveDate,
    ) -> Result<Vec<Booking>, BookingQueryError> {
        let (start, end) = day_bounds(date)?;
        let query = format!(
            "SELECT {COLUMNS} FROM bookings
             WHERE court_id = $1 AND booking_time >= $2 AND booking_time < $3
             ORDER BY booking_time"
        );
        let rows = sqlx::query_as::<_, Booking>(&query)
            .bind(court_id)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}
