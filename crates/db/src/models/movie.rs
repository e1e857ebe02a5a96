//! Movie entity model and DTOs.

use marquee_core::show::Movie as MovieSummary;
use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movie` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub duration: i32,
    pub genre: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

impl From<Movie> for MovieSummary {
    fn from(row: Movie) -> Self {
        Self {
            id: row.id,
            title: row.title,
            duration: row.duration,
            genre: row.genre,
            description: row.description,
            image_url: row.image_url,
        }
    }
}

/// DTO for inserting a movie. Movies are managed elsewhere; this exists to
/// seed fixtures.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub duration: i32,
    pub genre: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}
