pub mod health;
pub mod show;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /shows                                           list, create
/// /shows/theater/{theater_id}                      list shows at a theater
/// /shows/{id}                                      get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/shows", show::router())
}
