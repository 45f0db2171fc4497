//! Handlers for the flag/moderation system.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use quorum_core::content::ContentRef;
use quorum_core::error::CoreError;
use quorum_core::types::DbId;
use quorum_db::models::flag::{CreateFlag, FileOutcome, Flag};
use quorum_db::repositories::FlagRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireSuperuser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for a filed flag.
#[derive(Debug, Serialize)]
pub struct FileFlagResponse {
    pub flag: Flag,
    /// Unresolved flags on the target after this filing.
    pub total_flags: i64,
    /// Whether this filing crossed the threshold and penalized the owner.
    pub penalty_applied: bool,
}

/// POST /api/v1/flags
///
/// Report a content item. One unresolved flag per reporter per item;
/// the sixth open flag applies a one-time -100 penalty to the owner.
pub async fn file_flag(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateFlag>,
) -> AppResult<impl IntoResponse> {
    let target =
        ContentRef::from_parts(&input.target_type, input.target_id).map_err(AppError::Core)?;

    match FlagRepo::file(
        &state.pool,
        auth.user_id,
        target,
        input.reason,
        input.description.as_deref(),
    )
    .await?
    {
        FileOutcome::Filed {
            flag,
            total_flags,
            penalty_applied,
        } => {
            tracing::info!(
                user_id = auth.user_id,
                target_type = %target.kind,
                target_id = target.id,
                total_flags,
                penalty_applied,
                "Flag filed",
            );
            Ok((
                StatusCode::CREATED,
                Json(DataResponse {
                    data: FileFlagResponse {
                        flag,
                        total_flags,
                        penalty_applied,
                    },
                }),
            ))
        }
        FileOutcome::Duplicate => Err(AppError::Core(CoreError::Conflict(
            "You have already flagged this item".into(),
        ))),
        FileOutcome::TargetMissing => Err(AppError::Core(target.not_found())),
    }
}

/// GET /api/v1/flags
///
/// Moderation queue: every unresolved flag, oldest first. Superuser only.
pub async fn list_open_flags(
    RequireSuperuser(_moderator): RequireSuperuser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let flags = FlagRepo::list_open(
        &state.pool,
        params.limit_or(50),
        params.offset_or_zero(),
    )
    .await?;

    Ok(Json(DataResponse { data: flags }))
}

/// POST /api/v1/flags/{id}/resolve
///
/// Mark a flag handled. Superuser only.
pub async fn resolve_flag(
    RequireSuperuser(moderator): RequireSuperuser,
    State(state): State<AppState>,
    Path(flag_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let resolved = FlagRepo::resolve(&state.pool, flag_id).await?;
    if !resolved {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Flag",
            id: flag_id,
        }));
    }

    tracing::info!(flag_id, moderator = %moderator.username, "Flag resolved");

    Ok(StatusCode::NO_CONTENT)
}
