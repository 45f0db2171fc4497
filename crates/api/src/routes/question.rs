//! Route definitions for the `/questions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{answer, comment, question, revision};
use crate::state::AppState;

/// Routes mounted at the API root.
///
/// ```text
/// GET    /questions                 -> list
/// POST   /questions                 -> create (requires auth)
/// GET    /questions/{id}            -> detail (counts a view)
/// PUT    /questions/{id}            -> update (owner)
/// DELETE /questions/{id}            -> delete (owner or superuser)
/// GET    /questions/{id}/answers    -> answers
/// POST   /questions/{id}/answers    -> answer (requires auth)
/// GET    /questions/{id}/comments   -> comments
/// POST   /questions/{id}/comments   -> comment (requires auth)
/// GET    /questions/{id}/revisions  -> edit history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/questions",
            get(question::list_questions).post(question::create_question),
        )
        .route(
            "/questions/{id}",
            get(question::get_question)
                .put(question::update_question)
                .delete(question::delete_question),
        )
        .route(
            "/questions/{id}/answers",
            get(answer::list_answers).post(answer::create_answer),
        )
        .route(
            "/questions/{id}/comments",
            get(comment::list_question_comments).post(comment::create_question_comment),
        )
        .route(
            "/questions/{id}/revisions",
            get(revision::list_question_revisions),
        )
}
