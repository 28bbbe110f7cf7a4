//! Repository for the `centers` table.

use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::center::{Center, NewCenter};

const COLUMNS: &str = "id, name, location";

/// Provides create and read operations for centers.
pub struct CenterRepo;

impl CenterRepo {
    /// Insert a new center, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewCenter) -> Result<Center, sqlx::Error> {
        let query = format!(
            "INSERT INTO centers (name, location) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Center>(&query)
            .bind(&input.name)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Center>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM centers WHERE id = $1");
        sqlx::query_as::<_, Center>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every center in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Center>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM centers ORDER BY id");
        sqlx::query_as::<_, Center>(&query).fetch_all(pool).await
    }
}
