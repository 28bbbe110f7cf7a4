use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use courtside_core::error::CoreError;
use courtside_db::repositories::booking_repo::{BookingQueryError, SLOT_CONSTRAINT};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `courtside_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request the extractors could not decode (malformed JSON, bad path id).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A failure with no better classification, e.g. a panicking handler.
    /// The detail is logged, never returned.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<BookingQueryError> for AppError {
    fn from(err: BookingQueryError) -> Self {
        match err {
            BookingQueryError::Core(e) => AppError::Core(e),
            BookingQueryError::Database(e) => AppError::Database(e),
        }
    }
}

const INTERNAL_MESSAGE: &str = "An internal error occurred";
const UNAVAILABLE_MESSAGE: &str = "The booking store is temporarily unavailable";
const SLOT_TAKEN_MESSAGE: &str = "Slot already booked";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::SlotAlreadyBooked => slot_taken(),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        // `message` duplicates `error` for clients that read either key.
        let body = json!({
            "error": message,
            "message": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn slot_taken() -> (StatusCode, &'static str, String) {
    (
        StatusCode::BAD_REQUEST,
        "SLOT_ALREADY_BOOKED",
        SLOT_TAKEN_MESSAGE.to_string(),
    )
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}

fn unavailable() -> (StatusCode, &'static str, String) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        "STORE_UNAVAILABLE",
        UNAVAILABLE_MESSAGE.to_string(),
    )
}

/// Human-readable message for a violated foreign key, by constraint name.
fn foreign_key_message(constraint: &str) -> Option<&'static str> {
    match constraint {
        "fk_sports_center" | "fk_courts_center" => {
            Some("center_id does not reference an existing center")
        }
        "fk_courts_sport_center" => {
            Some("sport_id does not reference a sport offered at this center")
        }
        "fk_bookings_court_scope" => {
            Some("court_id does not reference a court of this center and sport")
        }
        _ => None,
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - The slot guard (`uq_bookings_court_slot`) maps to 400 `SLOT_ALREADY_BOOKED`.
/// - Other unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Known foreign key violations map to 400 `VALIDATION_ERROR`.
/// - Pool exhaustion, I/O failures, and statement timeouts map to 503.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            tracing::error!(error = %err, "Database unavailable");
            unavailable()
        }
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                // unique_violation
                Some("23505") if constraint == SLOT_CONSTRAINT => return slot_taken(),
                Some("23505") if constraint.starts_with("uq_") => {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
                // foreign_key_violation
                Some("23503") => {
                    if let Some(message) = foreign_key_message(constraint) {
                        return (
                            StatusCode::BAD_REQUEST,
                            "VALIDATION_ERROR",
                            message.to_string(),
                        );
                    }
                }
                // query_canceled (statement_timeout)
                Some("57014") => {
                    tracing::error!(error = %db_err, "Database statement timed out");
                    return unavailable();
                }
                _ => {}
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
