//! Query parameter types for API handlers that are not tied to a db model.

use serde::Deserialize;

/// `?date=YYYY-MM-DD` for the court availability grid.
///
/// Optional at the extractor so a missing date becomes a JSON 400.
#[derive(Debug, Deserialize)]
pub struct DateParams {
    pub date: Option<String>,
}
