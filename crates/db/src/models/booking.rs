//! Booking entity model, DTOs, and the day filter used for listings.

use chrono::NaiveDate;
use courtside_core::booking::{parse_date, parse_slot_time};
use courtside_core::catalog::{has_text, missing_fields, require_id, require_text};
use courtside_core::error::CoreError;
use courtside_core::types::{DbId, IdInput, SlotTime, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `bookings` table. `booking_time` is always on the hour.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub court_id: DbId,
    pub center_id: DbId,
    pub sport_id: DbId,
    pub booking_time: SlotTime,
    pub customer_name: String,
    pub created_at: Timestamp,
}

/// A booking joined with its court's display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BookingWithCourt {
    pub id: DbId,
    pub court_id: DbId,
    pub center_id: DbId,
    pub sport_id: DbId,
    pub booking_time: SlotTime,
    pub customer_name: String,
    pub created_at: Timestamp,
    pub court_name: String,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// JSON body for `POST /bookings`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBooking {
    pub court_id: Option<IdInput>,
    pub center_id: Option<IdInput>,
    pub sport_id: Option<IdInput>,
    pub booking_time: Option<String>,
    pub customer_name: Option<String>,
}

/// A validated booking. `booking_time` is already truncated to its hour.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub court_id: DbId,
    pub center_id: DbId,
    pub sport_id: DbId,
    pub booking_time: SlotTime,
    pub customer_name: String,
}

impl CreateBooking {
    pub fn validate(&self) -> Result<NewBooking, CoreError> {
        missing_fields(&[
            ("court_id", self.court_id.is_some()),
            ("center_id", self.center_id.is_some()),
            ("sport_id", self.sport_id.is_some()),
            ("booking_time", has_text(self.booking_time.as_deref())),
            ("customer_name", has_text(self.customer_name.as_deref())),
        ])?;
        Ok(NewBooking {
            court_id: require_id("court_id", self.court_id.as_ref())?,
            center_id: require_id("center_id", self.center_id.as_ref())?,
            sport_id: require_id("sport_id", self.sport_id.as_ref())?,
            booking_time: parse_slot_time(self.booking_time.as_deref().unwrap_or_default())?,
            customer_name: require_text("customer_name", self.customer_name.as_deref())?,
        })
    }
}

/// Query string for `GET /bookings`. Every parameter is mandatory but kept
/// optional here so absence becomes a JSON validation error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingListParams {
    pub center_id: Option<String>,
    pub sport_id: Option<String>,
    pub date: Option<String>,
}

/// Validated filter for bookings on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingDayFilter {
    pub center_id: DbId,
    pub sport_id: DbId,
    pub date: NaiveDate,
}

impl BookingListParams {
    pub fn validate(&self) -> Result<BookingDayFilter, CoreError> {
        missing_fields(&[
            ("center_id", has_text(self.center_id.as_deref())),
            ("sport_id", has_text(self.sport_id.as_deref())),
            ("date", has_text(self.date.as_deref())),
        ])?;
        let center_id = self.center_id.clone().map(IdInput::Text);
        let sport_id = self.sport_id.clone().map(IdInput::Text);
        Ok(BookingDayFilter {
            center_id: require_id("center_id", center_id.as_ref())?,
            sport_id: require_id("sport_id", sport_id.as_ref())?,
            date: parse_date(self.date.as_deref().unwrap_or_default())?,
        })
    }
}
