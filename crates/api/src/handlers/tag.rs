//! Handlers for the `/tags` resource.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use quorum_core::error::CoreError;
use quorum_core::types::DbId;
use quorum_db::models::tag::TagListParams;
use quorum_db::repositories::TagRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/tags
///
/// List tags ordered by name.
pub async fn list_tags(
    State(state): State<AppState>,
    Query(params): Query<TagListParams>,
) -> AppResult<impl IntoResponse> {
    let tags = TagRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: tags }))
}

/// GET /api/v1/tags/{id}
///
/// Look up one tag.
pub async fn get_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let tag = TagRepo::find_by_id(&state.pool, tag_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tag",
            id: tag_id,
        }))?;

    Ok(Json(DataResponse { data: tag }))
}
