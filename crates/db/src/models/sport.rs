//! Sport entity model and DTOs.

use courtside_core::catalog::{has_text, missing_fields, require_id, require_text};
use courtside_core::error::CoreError;
use courtside_core::types::{DbId, IdInput};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `sports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sport {
    pub id: DbId,
    pub name: String,
    pub center_id: DbId,
}

/// Listing shape for `GET /centers/{center_id}/sports`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SportSummary {
    pub id: DbId,
    pub name: String,
}

/// JSON body for `POST /sports`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSport {
    pub name: Option<String>,
    pub center_id: Option<IdInput>,
}

#[derive(Debug, Clone)]
pub struct NewSport {
    pub name: String,
    pub center_id: DbId,
}

impl CreateSport {
    pub fn validate(&self) -> Result<NewSport, CoreError> {
        missing_fields(&[
            ("name", has_text(self.name.as_deref())),
            ("center_id", self.center_id.is_some()),
        ])?;
        Ok(NewSport {
            name: require_text("name", self.name.as_deref())?,
            center_id: require_id("center_id", self.center_id.as_ref())?,
        })
    }
}
