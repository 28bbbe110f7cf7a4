//! Repository for the `courts` table.

use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::court::{Court, CourtSummary, NewCourt};

const COLUMNS: &str = "id, name, center_id, sport_id";

/// Provides create and read operations for courts.
pub struct CourtRepo;

impl CourtRepo {
    /// Insert a new court, returning the created row.
    ///
    /// The sport must belong to the given center (`fk_courts_sport_center`).
    pub async fn create(pool: &PgPool, input: &NewCourt) -> Result<Court, sqlx::Error> {
        let query = format!(
            "INSERT INTO courts (name, center_id, sport_id) VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Court>(&query)
            .bind(&input.name)
            .bind(input.center_id)
            .bind(input.sport_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Court>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courts WHERE id = $1");
        sqlx::query_as::<_, Court>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List courts for one sport at one center.
    pub async fn list_by_center_and_sport(
        pool: &PgPool,
        center_id: DbId,
        sport_id: DbId,
    ) -> Result<Vec<CourtSummary>, sqlx::Error> {
        sqlx::query_as::<_, CourtSummary>(
            "SELECT id, name FROM courts
             WHERE center_id = $1 AND sport_id = $2
             ORDER BY id",
        )
        .bind(center_id)
        .bind(sport_id)
        .fetch_all(pool)
        .await
    }
}
