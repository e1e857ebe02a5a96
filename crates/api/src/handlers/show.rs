//! Handlers for the `/shows` resource.
//!
//! Reads are public. Creating and deleting require an authenticated caller.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use marquee_core::show::CreateShow;
use marquee_core::types::DbId;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/v1/shows
///
/// List every show with movie and theater fields flattened in.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let shows = state.shows.list_all().await?;
    Ok(Json(shows))
}

/// GET /api/v1/shows/theater/{theater_id}
///
/// List the shows at one theater, earliest first. Unknown theaters yield `[]`.
pub async fn list_by_theater(
    State(state): State<AppState>,
    AppPath(theater_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let shows = state.shows.list_by_theater(theater_id).await?;
    Ok(Json(shows))
}

/// GET /api/v1/shows/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let show = state.shows.get_by_id(id).await?;
    Ok(Json(show))
}

/// POST /api/v1/shows
///
/// Create a show after checking that its movie and theater exist.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<CreateShow>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(user_id = user.user_id, role = %user.role, "Creating show");
    let show = state.shows.create(&input).await?;
    Ok((StatusCode::CREATED, Json(show)))
}

/// DELETE /api/v1/shows/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(
        user_id = user.user_id,
        role = %user.role,
        show_id = id,
        "Deleting show"
    );
    state.shows.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Show deleted successfully",
    }))
}
