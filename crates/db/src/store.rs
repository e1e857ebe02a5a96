//! [`ShowStore`] backed by PostgreSQL.

use async_trait::async_trait;
use marquee_core::directory::ShowStore;
use marquee_core::error::CoreError;
use marquee_core::show::{NewShow, ShowDetail, ShowListing};
use marquee_core::types::DbId;

use crate::repositories::{MovieRepo, ShowRepo, TheaterRepo};
use crate::DbPool;

/// Delegates each store operation to the repositories.
#[derive(Clone)]
pub struct PgShowStore {
    pool: DbPool,
}

impl PgShowStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn store_error(err: sqlx::Error) -> CoreError {
    CoreError::Store(err.to_string())
}

#[async_trait]
impl ShowStore for PgShowStore {
    async fn list_listings(&self) -> Result<Vec<ShowListing>, CoreError> {
        let rows = ShowRepo::list_listings(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(ShowListing::from).collect())
    }

    async fn list_for_theater(&self, theater_id: DbId) -> Result<Vec<ShowDetail>, CoreError> {
        let rows = ShowRepo::list_for_theater(&self.pool, theater_id)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(ShowDetail::from).collect())
    }

    async fn find_detail(&self, id: DbId) -> Result<Option<ShowDetail>, CoreError> {
        let row = ShowRepo::find_detail(&self.pool, id)
            .await
            .map_err(store_error)?;
        Ok(row.map(ShowDetail::from))
    }

    async fn movie_exists(&self, id: DbId) -> Result<bool, CoreError> {
        MovieRepo::exists(&self.pool, id).await.map_err(store_error)
    }

    async fn theater_exists(&self, id: DbId) -> Result<bool, CoreError> {
        TheaterRepo::exists(&self.pool, id).await.map_err(store_error)
    }

    async fn insert_show(&self, show: &NewShow) -> Result<DbId, CoreError> {
        let row = ShowRepo::create(&self.pool, show)
            .await
            .map_err(store_error)?;
        Ok(row.id)
    }

    async fn delete_show(&self, id: DbId) -> Result<bool, CoreError> {
        ShowRepo::delete(&self.pool, id).await.map_err(store_error)
    }
}
