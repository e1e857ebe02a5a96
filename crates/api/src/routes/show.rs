//! Route definitions for shows.

use axum::routing::get;
use axum::Router;

use crate::handlers::show;
use crate::state::AppState;

/// Routes mounted at `/shows`.
///
/// ```text
/// GET    /                         -> list
/// POST   /                         -> create (auth)
/// GET    /theater/{theater_id}     -> list_by_theater
/// GET    /{id}                     -> get_by_id
/// DELETE /{id}                     -> delete (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(show::list).post(show::create))
        .route("/theater/{theater_id}", get(show::list_by_theater))
        .route("/{id}", get(show::get_by_id).delete(show::delete))
}
