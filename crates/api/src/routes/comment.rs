//! Route definitions for the `/comments` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{comment, revision};
use crate::state::AppState;

/// Routes mounted at the API root.
///
/// ```text
/// PUT    /comments/{id}            -> update (owner)
/// DELETE /comments/{id}            -> delete (owner or superuser)
/// GET    /comments/{id}/revisions  -> edit history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/comments/{id}",
            put(comment::update_comment).delete(comment::delete_comment),
        )
        .route(
            "/comments/{id}/revisions",
            get(revision::list_comment_revisions),
        )
}
