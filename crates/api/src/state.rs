use std::sync::Arc;

use marquee_core::directory::ShowDirectory;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks).
    pub pool: marquee_db::DbPool,
    /// Server configuration (read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Show directory over the injected store.
    pub shows: ShowDirectory,
}

impl AppState {
    /// Build state whose show directory is backed by the given pool.
    pub fn new(pool: marquee_db::DbPool, config: ServerConfig) -> Self {
        let store = Arc::new(marquee_db::PgShowStore::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            shows: ShowDirectory::new(store),
        }
    }
}
