//! Handlers for user profiles.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use quorum_core::error::CoreError;
use quorum_core::types::{DbId, Timestamp};
use quorum_db::repositories::{ProfileRepo, UserRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Public profile payload: user identity plus reputation.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: DbId,
    pub username: String,
    pub reputation: i64,
    pub city: Option<String>,
    pub member_since: Timestamp,
}

/// GET /api/v1/users/{id}
///
/// Public profile for any user.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let profile = load_profile(&state, user_id).await?;
    Ok(Json(DataResponse { data: profile }))
}

/// GET /api/v1/users/me
///
/// Profile of the authenticated user.
pub async fn get_own_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let profile = load_profile(&state, auth.user_id).await?;
    Ok(Json(DataResponse { data: profile }))
}

async fn load_profile(state: &AppState, user_id: DbId) -> AppResult<ProfileResponse> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    let profile = ProfileRepo::find_by_user(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: user_id,
        }))?;

    Ok(ProfileResponse {
        id: user.id,
        username: user.username,
        reputation: profile.reputation,
        city: profile.city,
        member_since: user.created_at,
    })
}
