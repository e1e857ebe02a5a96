//! Show entity model and the flat join rows folded into the directory's shapes.
//!
//! Joins against `movie` and `theater` come back as one flat row per show with
//! aliased columns. [`ShowJoinRow`] folds into the nested
//! [`ShowDetail`](marquee_core::show::ShowDetail);
//! [`ShowListingRow`] maps one-to-one onto the flattened
//! [`ShowListing`](marquee_core::show::ShowListing).

use marquee_core::show::{Movie, ShowDetail, ShowListing, Theater};
use marquee_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `shows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub movie_id: DbId,
    pub theater_id: DbId,
    pub show_time: Timestamp,
    pub price: f64,
    pub created_at: Timestamp,
}

/// One show joined with its movie and theater, movie description included.
#[derive(Debug, Clone, FromRow)]
pub struct ShowJoinRow {
    pub id: DbId,
    pub movie_id: DbId,
    pub theater_id: DbId,
    pub show_time: Timestamp,
    pub price: f64,
    pub movie_title: String,
    pub movie_duration: i32,
    pub movie_genre: String,
    pub movie_description: Option<String>,
    pub movie_image_url: Option<String>,
    pub theater_name: String,
    pub theater_location: String,
}

impl From<ShowJoinRow> for ShowDetail {
    fn from(row: ShowJoinRow) -> Self {
        Self {
            id: row.id,
            movie_id: row.movie_id,
            theater_id: row.theater_id,
            show_time: row.show_time,
            price: row.price,
            movie: Movie {
                id: row.movie_id,
                title: row.movie_title,
                duration: row.movie_duration,
                genre: row.movie_genre,
                description: row.movie_description,
                image_url: row.movie_image_url,
            },
            theater: Theater {
                id: row.theater_id,
                name: row.theater_name,
                location: row.theater_location,
            },
        }
    }
}

/// One show with movie and theater fields flattened in.
#[derive(Debug, Clone, FromRow)]
pub struct ShowListingRow {
    pub id: DbId,
    pub movie_id: DbId,
    pub theater_id: DbId,
    pub show_time: Timestamp,
    pub price: f64,
    pub movie_title: String,
    pub duration: i32,
    pub genre: String,
    pub image_url: Option<String>,
    pub theater_name: String,
    pub location: String,
}

impl From<ShowListingRow> for ShowListing {
    fn from(row: ShowListingRow) -> Self {
        Self {
            id: row.id,
            movie_id: row.movie_id,
            theater_id: row.theater_id,
            show_time: row.show_time,
            price: row.price,
            movie_title: row.movie_title,
            duration: row.duration,
            genre: row.genre,
            image_url: row.image_url,
            theater_name: row.theater_name,
            location: row.location,
        }
    }
}
