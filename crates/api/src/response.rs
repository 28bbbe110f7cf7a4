//! Response bodies for the create endpoints.
//!
//! Each create returns `{ "message": ..., "<entity>_id": ... }` with status 201.
//! Listings return bare JSON arrays of the row structs.

use courtside_core::types::DbId;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CenterCreated {
    pub message: &'static str,
    pub center_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct SportCreated {
    pub message: &'static str,
    pub sport_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct CourtCreated {
    pub message: &'static str,
    pub court_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct BookingCreated {
    pub message: &'static str,
    pub booking_id: DbId,
}
