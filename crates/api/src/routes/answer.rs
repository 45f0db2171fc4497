//! Route definitions for the `/answers` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{answer, comment, revision};
use crate::state::AppState;

/// Routes mounted at the API root.
///
/// ```text
/// PUT    /answers/{id}            -> update (owner)
/// DELETE /answers/{id}            -> delete (owner or superuser)
/// POST   /answers/{id}/accept     -> accept (question owner)
/// GET    /answers/{id}/comments   -> comments
/// POST   /answers/{id}/comments   -> comment (requires auth)
/// GET    /answers/{id}/revisions  -> edit history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/answers/{id}",
            put(answer::update_answer).delete(answer::delete_answer),
        )
        .route("/answers/{id}/accept", post(answer::accept_answer))
        .route(
            "/answers/{id}/comments",
            get(comment::list_answer_comments).post(comment::create_answer_comment),
        )
        .route(
            "/answers/{id}/revisions",
            get(revision::list_answer_revisions),
        )
}
