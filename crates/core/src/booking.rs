//! Slot arithmetic for the reservation registry.
//!
//! A slot is a (court, hour) pair. Every booking time is normalised to the
//! start of its hour before it is stored, so the store's unique constraint on
//! `(court_id, booking_time)` is exactly "one booking per court per hour".

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use crate::error::CoreError;
use crate::types::SlotTime;

/// Canonical wire format for a slot, e.g. `2024-06-01T09:00:00`.
pub const SLOT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Wire format for calendar dates in query strings.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted layouts for an incoming `booking_time`, tried in order.
///
/// `%H` accepts a single digit, which covers clients that send
/// `2024-06-01T9:00:00`.
const ACCEPTED_SLOT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a `booking_time` string and truncate it to the start of its hour.
///
/// Offsets in RFC 3339 input are dropped and the written wall-clock time is
/// kept, since the facility operates on local time.
pub fn parse_slot_time(raw: &str) -> Result<SlotTime, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CoreError::Validation("booking_time is required".to_string()));
    }

    let parsed = ACCEPTED_SLOT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local())
        })
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "booking_time must look like YYYY-MM-DDTHH:00:00, got '{raw}'"
            ))
        })?;

    truncate_to_hour(parsed)
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CoreError::Validation("date is required".to_string()));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        CoreError::Validation(format!("date must look like YYYY-MM-DD, got '{raw}'"))
    })
}

/// Drop minutes, seconds, and sub-seconds.
pub fn truncate_to_hour(time: NaiveDateTime) -> Result<SlotTime, CoreError> {
    slot_at(time.date(), time.hour())
}

/// The slot starting at `hour` on `date`.
pub fn slot_at(date: NaiveDate, hour: u32) -> Result<SlotTime, CoreError> {
    NaiveTime::from_hms_opt(hour, 0, 0)
        .map(|t| date.and_time(t))
        .ok_or_else(|| CoreError::Validation(format!("hour must be 0-23, got {hour}")))
}

/// Format a slot in the canonical wire format.
pub fn format_slot(slot: SlotTime) -> String {
    slot.format(SLOT_FORMAT).to_string()
}

// ---------------------------------------------------------------------------
// Day ranges
// ---------------------------------------------------------------------------

/// Half-open `[start, end)` covering every slot on `date`.
pub fn day_bounds(date: NaiveDate) -> Result<(SlotTime, SlotTime), CoreError> {
    let next = date
        .succ_opt()
        .ok_or_else(|| CoreError::Validation(format!("date {date} is out of range")))?;
    Ok((date.and_time(NaiveTime::MIN), next.and_time(NaiveTime::MIN)))
}

// ---------------------------------------------------------------------------
// Opening hours
// ---------------------------------------------------------------------------

/// Hours during which courts can be booked, `open` inclusive to `close`
/// exclusive. Drives the availability grid only; `create` accepts any hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    open: u32,
    close: u32,
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self { open: 5, close: 11 }
    }
}

impl OpeningHours {
    pub fn new(open: u32, close: u32) -> Result<Self, CoreError> {
        if close > 24 || open >= close {
            return Err(CoreError::Validation(format!(
                "opening hours must satisfy 0 <= open < close <= 24, got {open}..{close}"
            )));
        }
        Ok(Self { open, close })
    }

    pub fn open(&self) -> u32 {
        self.open
    }

    pub fn close(&self) -> u32 {
        self.close
    }

    pub fn contains(&self, hour: u32) -> bool {
        (self.open..self.close).contains(&hour)
    }

    pub fn hours(&self) -> impl Iterator<Item = u32> {
        self.open..self.close
    }

    /// Every slot on `date` inside the window, in chronological order.
    pub fn slots_on(&self, date: NaiveDate) -> Result<Vec<SlotTime>, CoreError> {
        self.hours().map(|h| slot_at(date, h)).collect()
    }
}

// ---------------------------------------------------------------------------
// Availability
// ---------------------------------------------------------------------------

/// One row of a court's daily schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotStatus {
    pub hour: u32,
    pub booking_time: SlotTime,
    pub booked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
}

/// Lay a court's bookings for `date` over the opening window.
///
/// `booked` holds `(slot, customer_name)` pairs; entries outside the window
/// or on another day are ignored.
pub fn availability(
    hours: &OpeningHours,
    date: NaiveDate,
    booked: &[(SlotTime, String)],
) -> Result<Vec<SlotStatus>, CoreError> {
    hours
        .slots_on(date)?
        .into_iter()
        .map(|slot| {
            let customer_name = booked
                .iter()
                .find(|(time, _)| *time == slot)
                .map(|(_, name)| name.clone());
            Ok(SlotStatus {
                hour: slot.hour(),
                booking_time: slot,
                booked: customer_name.is_some(),
                customer_name,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
