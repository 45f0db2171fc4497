//! Route definitions for user profiles.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET /me    -> own profile (requires auth)
/// GET /{id}  -> public profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(user::get_own_profile))
        .route("/{id}", get(user::get_profile))
}
