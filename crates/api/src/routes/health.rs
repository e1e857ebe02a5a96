//! Liveness check for the show directory server.
//!
//! The endpoint always answers 200 so load balancers can tell the process is
//! up; a lost database connection shows as `"degraded"` rather than a failure.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the show store answers, `"degraded"` otherwise.
    pub status: &'static str,
    /// `marquee-api` package version.
    pub version: &'static str,
    /// Whether `SELECT 1` against the shows database succeeded.
    pub db_healthy: bool,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = marquee_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check could not reach the shows database");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mounted at the root, outside `/api/v1`, so health checks need no API prefix.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
