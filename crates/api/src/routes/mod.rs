pub mod booking;
pub mod catalog;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the public route tree.
///
/// Route hierarchy:
///
/// ```text
/// /centers                                         list, create
/// /centers/{center_id}/sports                      list sports of a center
/// /centers/{center_id}/sports/{sport_id}/courts    list courts of a sport at a center
///
/// /sports                                          create
///
/// /courts                                          create
/// /courts/{court_id}/availability                  daily slot grid (?date=)
///
/// /bookings                                        list (?center_id&sport_id&date), create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/centers", catalog::center_router())
        .nest("/sports", catalog::sport_router())
        .nest("/courts", catalog::court_router())
        .nest("/bookings", booking::router())
}
