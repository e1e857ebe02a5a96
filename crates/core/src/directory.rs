//! The show directory: every read and write of show records goes through here.
//!
//! The directory owns no state beyond an injected [`ShowStore`]. Each operation
//! is instrumented with a `tracing` span; failures are recorded on the span and
//! result sizes are emitted at `debug` level, so output is controlled entirely
//! by the installed subscriber.
//!
//! `create` checks movie and theater existence explicitly before inserting and
//! does not rely on store-level foreign keys. The checks and the insert are
//! separate statements, so a reference deleted concurrently between them can
//! still yield an orphaned show.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::show::{CreateShow, NewShow, ShowDetail, ShowListing};
use crate::types::DbId;

/// Persistence operations the directory needs from the relational store.
///
/// Implementations must use parameterized statements and surface store
/// failures as [`CoreError::Store`].
#[async_trait]
pub trait ShowStore: Send + Sync {
    /// All shows joined with their movie and theater, flattened.
    async fn list_listings(&self) -> Result<Vec<ShowListing>, CoreError>;

    /// Shows at one theater, nested, ascending by show time.
    async fn list_for_theater(&self, theater_id: DbId) -> Result<Vec<ShowDetail>, CoreError>;

    /// The first joined row for the show, if any.
    async fn find_detail(&self, id: DbId) -> Result<Option<ShowDetail>, CoreError>;

    async fn movie_exists(&self, id: DbId) -> Result<bool, CoreError>;

    async fn theater_exists(&self, id: DbId) -> Result<bool, CoreError>;

    /// Insert a show and return the store-assigned id.
    async fn insert_show(&self, show: &NewShow) -> Result<DbId, CoreError>;

    /// Delete a show. Returns `false` when no row had that id.
    async fn delete_show(&self, id: DbId) -> Result<bool, CoreError>;
}

/// Mediates all access to show records and their joined movie/theater data.
#[derive(Clone)]
pub struct ShowDirectory {
    store: Arc<dyn ShowStore>,
}

impl ShowDirectory {
    pub fn new(store: Arc<dyn ShowStore>) -> Self {
        Self { store }
    }

    /// List every show with movie and theater fields flattened in.
    #[tracing::instrument(skip(self), err)]
    pub async fn list_all(&self) -> Result<Vec<ShowListing>, CoreError> {
        let shows = self.store.list_listings().await?;
        tracing::debug!(count = shows.len(), "Listed shows");
        Ok(shows)
    }

    /// List the shows at a theater, earliest first.
    ///
    /// An unknown theater is not an error; it simply has no shows.
    #[tracing::instrument(skip(self), err)]
    pub async fn list_by_theater(&self, theater_id: DbId) -> Result<Vec<ShowDetail>, CoreError> {
        let shows = self.store.list_for_theater(theater_id).await?;
        tracing::debug!(count = shows.len(), "Listed shows for theater");
        Ok(shows)
    }

    #[tracing::instrument(skip(self), err)]
    pub async fn get_by_id(&self, id: DbId) -> Result<ShowDetail, CoreError> {
        let show = self
            .store
            .find_detail(id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Show", id })?;
        tracing::debug!(movie_id = show.movie_id, theater_id = show.theater_id, "Fetched show");
        Ok(show)
    }

    /// Validate, check references, insert, then re-read the joined show.
    #[tracing::instrument(skip(self, input), err)]
    pub async fn create(&self, input: &CreateShow) -> Result<ShowDetail, CoreError> {
        let new_show = input.validate()?;

        if !self.store.movie_exists(new_show.movie_id).await? {
            return Err(CoreError::NotFound {
                entity: "Movie",
                id: new_show.movie_id,
            });
        }
        if !self.store.theater_exists(new_show.theater_id).await? {
            return Err(CoreError::NotFound {
                entity: "Theater",
                id: new_show.theater_id,
            });
        }

        let id = self.store.insert_show(&new_show).await?;
        tracing::debug!(show_id = id, "Inserted show");

        // The row can vanish between insert and re-read under a concurrent delete.
        self.store
            .find_detail(id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Show", id })
    }

    /// Delete a show. Deleting an id twice fails the second time.
    #[tracing::instrument(skip(self), err)]
    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        if !self.store.delete_show(id).await? {
            return Err(CoreError::NotFound { entity: "Show", id });
        }
        tracing::debug!("Deleted show");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::show::{Movie, Theater, ALL_FIELDS_REQUIRED};
    use crate::types::Timestamp;

    /// In-memory store keyed like the relational tables.
    #[derive(Default)]
    struct MemoryStore {
        movies: BTreeMap<DbId, Movie>,
        theaters: BTreeMap<DbId, Theater>,
        shows: Mutex<BTreeMap<DbId, NewShow>>,
        next_id: AtomicUsize,
        /// Number of store calls, to prove validation never reaches the store.
        calls: AtomicUsize,
        fail_with: Option<String>,
    }

    impl MemoryStore {
        fn seeded() -> Self {
            let mut store = Self::default();
            store.movies.insert(
                1,
                Movie {
                    id: 1,
                    title: "Inception".into(),
                    duration: 148,
                    genre: "Sci-Fi".into(),
                    description: Some("Dreams within dreams".into()),
                    image_url: None,
                },
            );
            store.theaters.insert(
                1,
                Theater {
                    id: 1,
                    name: "Grand".into(),
                    location: "Downtown".into(),
                },
            );
            store.theaters.insert(
                2,
                Theater {
                    id: 2,
                    name: "Empty Hall".into(),
                    location: "Uptown".into(),
                },
            );
            store
        }

        fn touch(&self) -> Result<(), CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_with {
                Some(msg) => Err(CoreError::Store(msg.clone())),
                None => Ok(()),
            }
        }

        fn detail(&self, id: DbId, show: &NewShow) -> Option<ShowDetail> {
            Some(ShowDetail {
                id,
                movie_id: show.movie_id,
                theater_id: show.theater_id,
                show_time: show.show_time,
                price: show.price,
                movie: self.movies.get(&show.movie_id)?.clone(),
                theater: self.theaters.get(&show.theater_id)?.clone(),
            })
        }

        fn row_count(&self) -> usize {
            self.shows.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ShowStore for MemoryStore {
        async fn list_listings(&self) -> Result<Vec<ShowListing>, CoreError> {
            self.touch()?;
            let shows = self.shows.lock().unwrap();
            Ok(shows
                .iter()
                .filter_map(|(id, s)| self.detail(*id, s))
                .map(|d| ShowListing {
                    id: d.id,
                    movie_id: d.movie_id,
                    theater_id: d.theater_id,
                    show_time: d.show_time,
                    price: d.price,
                    movie_title: d.movie.title,
                    duration: d.movie.duration,
                    genre: d.movie.genre,
                    image_url: d.movie.image_url,
                    theater_name: d.theater.name,
                    location: d.theater.location,
                })
                .collect())
        }

        async fn list_for_theater(&self, theater_id: DbId) -> Result<Vec<ShowDetail>, CoreError> {
            self.touch()?;
            let shows = self.shows.lock().unwrap();
            let mut rows: Vec<ShowDetail> = shows
                .iter()
                .filter(|(_, s)| s.theater_id == theater_id)
                .filter_map(|(id, s)| self.detail(*id, s))
                .collect();
            rows.sort_by_key(|d| (d.show_time, d.id));
            Ok(rows)
        }

        async fn find_detail(&self, id: DbId) -> Result<Option<ShowDetail>, CoreError> {
            self.touch()?;
            let shows = self.shows.lock().unwrap();
            Ok(shows.get(&id).and_then(|s| self.detail(id, s)))
        }

        async fn movie_exists(&self, id: DbId) -> Result<bool, CoreError> {
            self.touch()?;
            Ok(self.movies.contains_key(&id))
        }

        async fn theater_exists(&self, id: DbId) -> Result<bool, CoreError> {
            self.touch()?;
            Ok(self.theaters.contains_key(&id))
        }

        async fn insert_show(&self, show: &NewShow) -> Result<DbId, CoreError> {
            self.touch()?;
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) as DbId + 1;
            self.shows.lock().unwrap().insert(id, show.clone());
            Ok(id)
        }

        async fn delete_show(&self, id: DbId) -> Result<bool, CoreError> {
            self.touch()?;
            Ok(self.shows.lock().unwrap().remove(&id).is_some())
        }
    }

    fn directory(store: MemoryStore) -> (ShowDirectory, Arc<MemoryStore>) {
        let store = Arc::new(store);
        (ShowDirectory::new(store.clone()), store)
    }

    fn input(movie_id: DbId, theater_id: DbId, show_time: &str, price: f64) -> CreateShow {
        CreateShow {
            movie_id: Some(movie_id.into()),
            theater_id: Some(theater_id.into()),
            show_time: Some(show_time.into()),
            price: Some(price.into()),
        }
    }

    fn at(hour: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn create_then_get_embeds_referenced_rows() {
        let (dir, store) = directory(MemoryStore::seeded());

        let created = dir
            .create(&input(1, 1, "2024-06-01T18:00:00Z", 12.5))
            .await
            .unwrap();
        assert_eq!(created.movie.title, "Inception");
        assert_eq!(created.theater.name, "Grand");
        assert_eq!(created.show_time, at(18));

        let fetched = dir.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(&fetched.movie, store.movies.get(&1).unwrap());
        assert_eq!(&fetched.theater, store.theaters.get(&1).unwrap());
    }

    #[tokio::test]
    async fn missing_field_never_touches_store() {
        let (dir, store) = directory(MemoryStore::seeded());
        let bad = CreateShow {
            price: None,
            ..input(1, 1, "2024-06-01T18:00:00Z", 12.5)
        };

        let result = dir.create(&bad).await;

        assert_matches!(result, Err(CoreError::Validation(msg)) if msg == ALL_FIELDS_REQUIRED);
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.row_count(), 0);
    }

    #[tokio::test]
    async fn unknown_movie_is_not_found_and_nothing_persisted() {
        let (dir, store) = directory(MemoryStore::seeded());

        let result = dir.create(&input(99, 1, "2024-06-01T18:00:00Z", 10.0)).await;

        assert_matches!(result, Err(CoreError::NotFound { entity: "Movie", id: 99 }));
        assert_eq!(store.row_count(), 0);
    }

    #[tokio::test]
    async fn unknown_theater_is_not_found_and_nothing_persisted() {
        let (dir, store) = directory(MemoryStore::seeded());

        let result = dir.create(&input(1, 42, "2024-06-01T18:00:00Z", 10.0)).await;

        assert_matches!(result, Err(CoreError::NotFound { entity: "Theater", id: 42 }));
        assert_eq!(store.row_count(), 0);
    }

    #[tokio::test]
    async fn movie_checked_before_theater() {
        let (dir, _store) = directory(MemoryStore::seeded());

        let result = dir.create(&input(99, 42, "2024-06-01T18:00:00Z", 10.0)).await;

        assert_matches!(result, Err(CoreError::NotFound { entity: "Movie", .. }));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_for_get_and_delete() {
        let (dir, _store) = directory(MemoryStore::seeded());

        assert_matches!(
            dir.get_by_id(404).await,
            Err(CoreError::NotFound { entity: "Show", id: 404 })
        );
        assert_matches!(
            dir.delete(404).await,
            Err(CoreError::NotFound { entity: "Show", id: 404 })
        );
    }

    #[tokio::test]
    async fn delete_is_not_idempotent() {
        let (dir, store) = directory(MemoryStore::seeded());
        let created = dir
            .create(&input(1, 1, "2024-06-01T18:00:00Z", 12.5))
            .await
            .unwrap();

        dir.delete(created.id).await.unwrap();

        assert_eq!(store.row_count(), 0);
        assert_matches!(dir.get_by_id(created.id).await, Err(CoreError::NotFound { .. }));
        assert_matches!(dir.delete(created.id).await, Err(CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn list_by_theater_is_empty_for_theater_without_shows() {
        let (dir, _store) = directory(MemoryStore::seeded());
        dir.create(&input(1, 1, "2024-06-01T18:00:00Z", 12.5))
            .await
            .unwrap();

        assert!(dir.list_by_theater(2).await.unwrap().is_empty());
        assert!(dir.list_by_theater(777).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_by_theater_orders_by_show_time() {
        let (dir, _store) = directory(MemoryStore::seeded());
        for time in [
            "2024-06-01T21:00:00Z",
            "2024-06-01T12:00:00Z",
            "2024-06-01T18:00:00Z",
        ] {
            dir.create(&input(1, 1, time, 9.0)).await.unwrap();
        }

        let times: Vec<Timestamp> = dir
            .list_by_theater(1)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.show_time)
            .collect();

        assert_eq!(times, vec![at(12), at(18), at(21)]);
    }

    #[tokio::test]
    async fn list_all_flattens_joined_fields() {
        let (dir, _store) = directory(MemoryStore::seeded());
        dir.create(&input(1, 1, "2024-06-01T18:00:00Z", 12.5))
            .await
            .unwrap();

        let listings = dir.list_all().await.unwrap();

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].movie_title, "Inception");
        assert_eq!(listings[0].theater_name, "Grand");
        assert_eq!(listings[0].location, "Downtown");
    }

    #[tokio::test]
    async fn store_failure_surfaces_message() {
        let store = MemoryStore {
            fail_with: Some("connection reset".into()),
            ..MemoryStore::seeded()
        };
        let (dir, _store) = directory(store);

        assert_matches!(dir.list_all().await, Err(CoreError::Store(msg)) if msg == "connection reset");
        assert_matches!(
            dir.create(&input(1, 1, "2024-06-01T18:00:00Z", 1.0)).await,
            Err(CoreError::Store(_))
        );
    }
}
