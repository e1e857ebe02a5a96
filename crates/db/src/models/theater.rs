use marquee_core::show::Theater as TheaterSummary;
use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `theater` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Theater {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub created_at: Timestamp,
}

impl From<Theater> for TheaterSummary {
    fn from(row: Theater) -> Self {
        Self {
            id: row.id,
            name: row.name,
            location: row.location,
        }
    }
}

/// DTO for inserting a theater (fixture seeding only).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTheater {
    pub name: String,
    pub location: String,
}
