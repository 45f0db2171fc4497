//! Handlers for content edit history.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use quorum_core::content::{ContentKind, ContentRef};
use quorum_core::types::DbId;
use quorum_db::repositories::{AnswerRepo, CommentRepo, QuestionRepo, RevisionRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/questions/{id}/revisions
pub async fn list_question_revisions(
    State(state): State<AppState>,
    Path(question_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    list_revisions(&state, ContentRef::question(question_id)).await
}

/// GET /api/v1/answers/{id}/revisions
pub async fn list_answer_revisions(
    State(state): State<AppState>,
    Path(answer_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    list_revisions(&state, ContentRef::answer(answer_id)).await
}

/// GET /api/v1/comments/{id}/revisions
pub async fn list_comment_revisions(
    State(state): State<AppState>,
    Path(comment_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    list_revisions(&state, ContentRef::comment(comment_id)).await
}

/// Full history for one content item, oldest first. 404s when the item
/// itself is gone (its revisions are cascaded away with it).
async fn list_revisions(
    state: &AppState,
    target: ContentRef,
) -> AppResult<Json<DataResponse<Vec<quorum_db::models::revision::Revision>>>> {
    let exists = match target.kind {
        ContentKind::Question => QuestionRepo::find_by_id(&state.pool, target.id)
            .await?
            .is_some(),
        ContentKind::Answer => AnswerRepo::find_by_id(&state.pool, target.id)
            .await?
            .is_some(),
        ContentKind::Comment => CommentRepo::find_by_id(&state.pool, target.id)
            .await?
            .is_some(),
    };
    if !exists {
        return Err(AppError::Core(target.not_found()));
    }

    let revisions = RevisionRepo::list_for_target(&state.pool, target).await?;
    Ok(Json(DataResponse { data: revisions }))
}
