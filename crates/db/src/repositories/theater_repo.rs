//! Repository for the `theater` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::theater::{CreateTheater, Theater};

/// Column list for the `theater` table.
const COLUMNS: &str = "id, name, location, created_at";

pub struct TheaterRepo;

impl TheaterRepo {
    /// Insert a new theater, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTheater) -> Result<Theater, sqlx::Error> {
        let query = format!(
            "INSERT INTO theater (name, location) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Theater>(&query)
            .bind(&input.name)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Theater>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM theater WHERE id = $1");
        sqlx::query_as::<_, Theater>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM theater WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }
}
