//! Route definitions for the search proxy.

use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

/// Routes mounted at `/search`. All accept `?q=&page=&sort=&order=`.
///
/// ```text
/// GET /questions -> question index
/// GET /answers   -> answer index
/// GET /comments  -> comment index
/// GET /tags      -> tag index
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(search::search_questions))
        .route("/answers", get(search::search_answers))
        .route("/comments", get(search::search_comments))
        .route("/tags", get(search::search_tags))
}
