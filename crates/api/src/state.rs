use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted and the config sits
/// behind an `Arc`. No other cross-request state exists.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: courtside_db::DbPool,
    /// Server configuration (opening hours are read by the availability handler).
    pub config: Arc<ServerConfig>,
}
