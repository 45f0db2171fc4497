//! Route definitions for the `/tags` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tag;
use crate::state::AppState;

/// Routes mounted at `/tags`.
///
/// ```text
/// GET /      -> list
/// GET /{id}  -> detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tag::list_tags))
        .route("/{id}", get(tag::get_tag))
}
