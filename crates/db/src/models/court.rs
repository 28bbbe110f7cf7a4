//! Court entity model and DTOs.

use courtside_core::catalog::{has_text, missing_fields, require_id, require_text};
use courtside_core::error::CoreError;
use courtside_core::types::{DbId, IdInput};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `courts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Court {
    pub id: DbId,
    pub name: String,
    pub center_id: DbId,
    pub sport_id: DbId,
}

/// Listing shape for `GET /centers/{center_id}/sports/{sport_id}/courts`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourtSummary {
    pub id: DbId,
    pub name: String,
}

/// JSON body for `POST /courts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCourt {
    pub name: Option<String>,
    pub center_id: Option<IdInput>,
    pub sport_id: Option<IdInput>,
}

#[derive(Debug, Clone)]
pub struct NewCourt {
    pub name: String,
    pub center_id: DbId,
    pub sport_id: DbId,
}

impl CreateCourt {
    pub fn validate(&self) -> Result<NewCourt, CoreError> {
        missing_fields(&[
            ("name", has_text(self.name.as_deref())),
            ("center_id", self.center_id.is_some()),
            ("sport_id", self.sport_id.is_some()),
        ])?;
        Ok(NewCourt {
            name: require_text("name", self.name.as_deref())?,
            center_id: require_id("center_id", self.center_id.as_ref())?,
            sport_id: require_id("sport_id", self.sport_id.as_ref())?,
        })
    }
}
