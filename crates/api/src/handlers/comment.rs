//! Handlers for comments on questions and answers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use quorum_core::content::ContentRef;
use quorum_core::error::CoreError;
use quorum_core::types::DbId;
use quorum_db::models::comment::{CreateComment, UpdateComment};
use quorum_db::repositories::comment_repo::CommentParent;
use quorum_db::repositories::CommentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::check_content;
use crate::indexing;
use crate::middleware::auth::AuthUser;
use crate::rate_limit;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/questions/{id}/comments
pub async fn create_question_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(question_id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    create_comment(auth, state, CommentParent::Question(question_id), input).await
}

/// POST /api/v1/answers/{id}/comments
pub async fn create_answer_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(answer_id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    create_comment(auth, state, CommentParent::Answer(answer_id), input).await
}

/// GET /api/v1/questions/{id}/comments
pub async fn list_question_comments(
    State(state): State<AppState>,
    Path(question_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let comments = CommentRepo::list_for_question(&state.pool, question_id).await?;
    Ok(Json(DataResponse { data: comments }))
}

/// GET /api/v1/answers/{id}/comments
pub async fn list_answer_comments(
    State(state): State<AppState>,
    Path(answer_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let comments = CommentRepo::list_for_answer(&state.pool, answer_id).await?;
    Ok(Json(DataResponse { data: comments }))
}

/// PUT /api/v1/comments/{id}
///
/// Owner-only edit with a revision snapshot.
pub async fn update_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(comment_id): Path<DbId>,
    Json(input): Json<UpdateComment>,
) -> AppResult<impl IntoResponse> {
    let existing = CommentRepo::find_by_id(&state.pool, comment_id)
        .await?
        .ok_or_else(|| AppError::Core(ContentRef::comment(comment_id).not_found()))?;

    if existing.user_id != auth.user_id && !auth.is_superuser() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the comment owner can edit it".into(),
        )));
    }

    check_content(&input.body, &auth)?;

    let comment = CommentRepo::update(&state.pool, comment_id, &input, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(ContentRef::comment(comment_id).not_found()))?;

    indexing::spawn_refresh(&state, ContentRef::comment(comment_id));

    Ok(Json(DataResponse { data: comment }))
}

/// DELETE /api/v1/comments/{id}
///
/// Owner or superuser.
pub async fn delete_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(comment_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = CommentRepo::find_by_id(&state.pool, comment_id)
        .await?
        .ok_or_else(|| AppError::Core(ContentRef::comment(comment_id).not_found()))?;

    if existing.user_id != auth.user_id && !auth.is_superuser() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the comment owner can delete it".into(),
        )));
    }

    let deleted = CommentRepo::delete(&state.pool, comment_id).await?;
    if !deleted {
        return Err(AppError::Core(ContentRef::comment(comment_id).not_found()));
    }

    tracing::info!(comment_id, user_id = auth.user_id, "Comment deleted");

    indexing::spawn_remove(&state, ContentRef::comment(comment_id));

    Ok(StatusCode::NO_CONTENT)
}

async fn create_comment(
    auth: AuthUser,
    state: AppState,
    parent: CommentParent,
    input: CreateComment,
) -> AppResult<(StatusCode, Json<DataResponse<quorum_db::models::comment::Comment>>)> {
    if input.body.trim().is_empty() {
        return Err(AppError::BadRequest("body must not be empty".into()));
    }
    check_content(&input.body, &auth)?;

    let recent =
        CommentRepo::count_created_since(&state.pool, auth.user_id, rate_limit::window_start())
            .await?;
    rate_limit::check(recent, rate_limit::COMMENTS_PER_HOUR, "comments").map_err(AppError::Core)?;

    let comment = CommentRepo::create(&state.pool, parent, auth.user_id, &input)
        .await?
        .ok_or_else(|| {
            let target = match parent {
                CommentParent::Question(id) => ContentRef::question(id),
                CommentParent::Answer(id) => ContentRef::answer(id),
            };
            AppError::Core(target.not_found())
        })?;

    tracing::info!(comment_id = comment.id, user_id = auth.user_id, "Comment created");

    indexing::spawn_refresh(&state, ContentRef::comment(comment.id));

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}
