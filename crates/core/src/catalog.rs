//! Field validation for centers, sports, and courts.
//!
//! Shared by every write path so that "missing", `null`, and blank input are
//! all reported the same way before anything reaches the store.

use crate::error::CoreError;
use crate::types::{DbId, IdInput};

/// Upper bound for names and locations; matches the `VARCHAR(255)` columns.
pub const MAX_TEXT_LEN: usize = 255;

/// Require a non-blank text field, returning it trimmed.
pub fn require_text(field: &str, value: Option<&str>) -> Result<String, CoreError> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_TEXT_LEN} characters"
        )));
    }
    // Postgres text columns cannot hold NUL.
    if trimmed.chars().any(char::is_control) {
        return Err(CoreError::Validation(format!(
            "{field} must not contain control characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Require an id field holding a positive integer.
pub fn require_id(field: &str, value: Option<&IdInput>) -> Result<DbId, CoreError> {
    let value =
        value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))?;
    value.resolve().ok_or_else(|| {
        CoreError::Validation(format!("{field} must be a positive integer"))
    })
}

/// Collect every missing-field error at once instead of stopping at the first.
///
/// The message lists all offending fields, e.g.
/// `"Missing required fields: name, center_id"`.
pub fn missing_fields(checks: &[(&str, bool)]) -> Result<(), CoreError> {
    let missing: Vec<&str> = checks
        .iter()
        .filter(|(_, present)| !present)
        .map(|(field, _)| *field)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// `true` when a text field is present and not blank.
pub fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
