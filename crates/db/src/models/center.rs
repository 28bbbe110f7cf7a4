//! Center entity model and DTOs.

use courtside_core::catalog::{has_text, missing_fields, require_text};
use courtside_core::error::CoreError;
use courtside_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `centers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Center {
    pub id: DbId,
    pub name: String,
    pub location: String,
}

/// JSON body for `POST /centers`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCenter {
    pub name: Option<String>,
    pub location: Option<String>,
}

/// A center that passed validation and is ready to insert.
#[derive(Debug, Clone)]
pub struct NewCenter {
    pub name: String,
    pub location: String,
}

impl CreateCenter {
    pub fn validate(&self) -> Result<NewCenter, CoreError> {
        missing_fields(&[
            ("name", has_text(self.name.as_deref())),
            ("location", has_text(self.location.as_deref())),
        ])?;
        Ok(NewCenter {
            name: require_text("name", self.name.as_deref())?,
            location: require_text("location", self.location.as_deref())?,
        })
    }
}
