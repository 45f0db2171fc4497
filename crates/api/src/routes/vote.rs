//! Route definitions for the vote ledger.

use axum::routing::post;
use axum::Router;

use crate::handlers::vote;
use crate::state::AppState;

/// Routes mounted at `/votes`.
///
/// ```text
/// POST / -> cast or switch a vote (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(vote::cast_vote))
}
