//! Route definitions for centers, sports, and courts.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{center, court, sport};
use crate::state::AppState;

/// Routes mounted at `/centers`.
///
/// ```text
/// GET    /                                   -> list
/// POST   /                                   -> create
/// GET    /{center_id}/sports                 -> sport::list_by_center
/// GET    /{center_id}/sports/{sport_id}/courts -> court::list_by_center_and_sport
/// ```
pub fn center_router() -> Router<AppState> {
    Router::new()
        .route("/", get(center::list).post(center::create))
        .route("/{center_id}/sports", get(sport::list_by_center))
        .route(
            "/{center_id}/sports/{sport_id}/courts",
            get(court::list_by_center_and_sport),
        )
}

/// Routes mounted at `/sports`.
pub fn sport_router() -> Router<AppState> {
    Router::new().route("/", post(sport::create))
}

/// Routes mounted at `/courts`.
///
/// ```text
/// POST   /                          -> create
/// GET    /{court_id}/availability   -> availability_for_day
/// ```
pub fn court_router() -> Router<AppState> {
    Router::new()
        .route("/", post(court::create))
        .route("/{court_id}/availability", get(court::availability_for_day))
}
