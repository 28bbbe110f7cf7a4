//! Repository for the `sports` table.

use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::sport::{NewSport, Sport, SportSummary};

const COLUMNS: &str = "id, name, center_id";

/// Provides create and read operations for sports.
pub struct SportRepo;

impl SportRepo {
    /// Insert a new sport, returning the created row.
    ///
    /// Fails with a foreign-key violation on `fk_sports_center` if the
    /// center does not exist.
    pub async fn create(pool: &PgPool, input: &NewSport) -> Result<Sport, sqlx::Error> {
        let query = format!(
            "INSERT INTO sports (name, center_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sport>(&query)
            .bind(&input.name)
            .bind(input.center_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Sport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sports WHERE id = $1");
        sqlx::query_as::<_, Sport>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the sports offered at a center. Unknown centers yield an empty list.
    pub async fn list_by_center(
        pool: &PgPool,
        center_id: DbId,
    ) -> Result<Vec<SportSummary>, sqlx::Error> {
        sqlx::query_as::<_, SportSummary>(
            "SELECT id, name FROM sports WHERE center_id = $1 ORDER BY id",
        )
        .bind(center_id)
        .fetch_all(pool)
        .await
    }
}
