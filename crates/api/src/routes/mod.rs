pub mod answer;
pub mod auth;
pub mod comment;
pub mod flag;
pub mod health;
pub mod question;
pub mod search;
pub mod tag;
pub mod user;
pub mod vote;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                     register (public)
/// /auth/login                        login (public)
/// /auth/refresh                      refresh (public)
/// /auth/logout                       logout (requires auth)
///
/// /users/me                          own profile (requires auth)
/// /users/{id}                        public profile
///
/// /questions                         list, create
/// /questions/{id}                    detail (counts a view), update, delete
/// /questions/{id}/answers            list, create
/// /questions/{id}/comments           list, create
/// /questions/{id}/revisions          edit history
///
/// /answers/{id}                      update, delete
/// /answers/{id}/accept               accept (question owner, POST)
/// /answers/{id}/comments             list, create
/// /answers/{id}/revisions            edit history
///
/// /comments/{id}                     update, delete
/// /comments/{id}/revisions           edit history
///
/// /tags                              list
/// /tags/{id}                         detail
///
/// /votes                             cast or switch a vote (POST)
///
/// /flags                             file a flag (POST), open queue (GET, superuser)
/// /flags/{id}/resolve                resolve (POST, superuser)
///
/// /search/questions                  full-text search (?q=&page=&sort=&order=)
/// /search/answers
/// /search/comments
/// /search/tags
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", user::router())
        .merge(question::router())
        .merge(answer::router())
        .merge(comment::router())
        .nest("/tags", tag::router())
        .nest("/votes", vote::router())
        .nest("/flags", flag::router())
        .nest("/search", search::router())
}
