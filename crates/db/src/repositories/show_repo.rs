//! Repository for the `shows` table and its joins against `movie` and `theater`.

use marquee_core::show::NewShow;
use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::show::{Show, ShowJoinRow, ShowListingRow};

/// Column list for the `shows` table.
const COLUMNS: &str = "id, movie_id, theater_id, show_time, price, created_at";

/// Select list for [`ShowJoinRow`].
const JOIN_COLUMNS: &str = "s.id, s.movie_id, s.theater_id, s.show_time, s.price, \
    m.title AS movie_title, m.duration AS movie_duration, m.genre AS movie_genre, \
    m.description AS movie_description, m.image_url AS movie_image_url, \
    t.name AS theater_name, t.location AS theater_location";

/// Select list for [`ShowListingRow`].
const LISTING_COLUMNS: &str = "s.id, s.movie_id, s.theater_id, s.show_time, s.price, \
    m.title AS movie_title, m.duration, m.genre, m.image_url, \
    t.name AS theater_name, t.location";

/// Inner join of a show against its movie and theater.
const JOIN_FROM: &str = "FROM shows s \
    JOIN movie m ON s.movie_id = m.id \
    JOIN theater t ON s.theater_id = t.id";

/// Provides create, read, and delete operations for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a validated show, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewShow) -> Result<Show, sqlx::Error> {
        let query = format!(
            "INSERT INTO shows (movie_id, theater_id, show_time, price) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(input.movie_id)
            .bind(input.theater_id)
            .bind(input.show_time)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find a bare show row by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Show>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shows WHERE id = $1");
        sqlx::query_as::<_, Show>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a show joined with its movie and theater.
    ///
    /// Only the first row is decoded should the join ever yield more than one.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<ShowJoinRow>, sqlx::Error> {
        let query = format!("SELECT {JOIN_COLUMNS} {JOIN_FROM} WHERE s.id = $1");
        sqlx::query_as::<_, ShowJoinRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every show joined with its movie and theater. Unordered.
    pub async fn list_listings(pool: &PgPool) -> Result<Vec<ShowListingRow>, sqlx::Error> {
        let query = format!("SELECT {LISTING_COLUMNS} {JOIN_FROM}");
        sqlx::query_as::<_, ShowListingRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the shows at one theater, earliest first.
    pub async fn list_for_theater(
        pool: &PgPool,
        theater_id: DbId,
    ) -> Result<Vec<ShowJoinRow>, sqlx::Error> {
        let query = format!(
            "SELECT {JOIN_COLUMNS} {JOIN_FROM} \
             WHERE s.theater_id = $1 \
             ORDER BY s.show_time ASC, s.id ASC"
        );
        sqlx::query_as::<_, ShowJoinRow>(&query)
            .bind(theater_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a show. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shows WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of show rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shows")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
