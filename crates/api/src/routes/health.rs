use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
///
/// The service stays up when the search engine is down (every route but
/// `/search` keeps working), so the two backends are reported separately
/// and either one degrades the overall status.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status: `"ok"` only when both backends answer.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Whether the search engine is reachable.
    pub search_healthy: bool,
}

/// GET /health -- returns service, database, and search engine health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = quorum_db::health_check(&state.pool).await.is_ok();
    let search_healthy = state.search.is_healthy().await;

    let status = if db_healthy && search_healthy {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        search_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
