//! Route definitions for the flag/moderation system.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::flag;
use crate::state::AppState;

/// Routes mounted at `/flags`.
///
/// ```text
/// POST /               -> file a flag (requires auth)
/// GET  /               -> open queue (superuser)
/// POST /{id}/resolve   -> resolve (superuser)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(flag::list_open_flags).post(flag::file_flag))
        .route("/{id}/resolve", post(flag::resolve_flag))
}
