//! Handlers for the `/answers` resource (and answer creation under a question).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use quorum_core::content::ContentRef;
use quorum_core::error::CoreError;
use quorum_core::types::DbId;
use quorum_db::models::answer::{AcceptOutcome, CreateAnswer, UpdateAnswer};
use quorum_db::repositories::{AnswerRepo, CommentRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::check_content;
use crate::indexing;
use crate::middleware::auth::AuthUser;
use crate::rate_limit;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/questions/{id}/answers
///
/// Post an answer. Validates the content, enforces the hourly limit,
/// and awards +10 reputation.
pub async fn create_answer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(question_id): Path<DbId>,
    Json(input): Json<CreateAnswer>,
) -> AppResult<impl IntoResponse> {
    if input.body.trim().is_empty() {
        return Err(AppError::BadRequest("body must not be empty".into()));
    }
    check_content(&input.body, &auth)?;

    let recent =
        AnswerRepo::count_created_since(&state.pool, auth.user_id, rate_limit::window_start())
            .await?;
    rate_limit::check(recent, rate_limit::ANSWERS_PER_HOUR, "answers").map_err(AppError::Core)?;

    let answer = AnswerRepo::create(&state.pool, question_id, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(ContentRef::question(question_id).not_found()))?;

    tracing::info!(answer_id = answer.id, question_id, user_id = auth.user_id, "Answer created");

    indexing::spawn_refresh(&state, ContentRef::answer(answer.id));

    Ok((StatusCode::CREATED, Json(DataResponse { data: answer })))
}

/// GET /api/v1/questions/{id}/answers
///
/// All answers for a question, accepted first.
pub async fn list_answers(
    State(state): State<AppState>,
    Path(question_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let answers = AnswerRepo::list_for_question(&state.pool, question_id).await?;
    Ok(Json(DataResponse { data: answers }))
}

/// POST /api/v1/answers/{id}/accept
///
/// Question-owner only. Accepting demotes any previously accepted
/// answer; the answer author earns +15 reputation exactly once.
pub async fn accept_answer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(answer_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    match AnswerRepo::accept(&state.pool, answer_id, auth.user_id).await? {
        AcceptOutcome::Accepted(answer) => {
            tracing::info!(answer_id, user_id = auth.user_id, "Answer accepted");
            Ok(Json(DataResponse { data: answer }))
        }
        AcceptOutcome::AlreadyAccepted(answer) => Ok(Json(DataResponse { data: answer })),
        AcceptOutcome::NotQuestionOwner => Err(AppError::Core(CoreError::Forbidden(
            "Only the question owner can accept an answer".into(),
        ))),
        AcceptOutcome::Missing => Err(AppError::Core(ContentRef::answer(answer_id).not_found())),
    }
}

/// PUT /api/v1/answers/{id}
///
/// Owner-only edit with a revision snapshot.
pub async fn update_answer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(answer_id): Path<DbId>,
    Json(input): Json<UpdateAnswer>,
) -> AppResult<impl IntoResponse> {
    let existing = AnswerRepo::find_by_id(&state.pool, answer_id)
        .await?
        .ok_or_else(|| AppError::Core(ContentRef::answer(answer_id).not_found()))?;

    if existing.user_id != auth.user_id && !auth.is_superuser() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the answer owner can edit it".into(),
        )));
    }

    check_content(&input.body, &auth)?;

    let answer = AnswerRepo::update(&state.pool, answer_id, &input, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(ContentRef::answer(answer_id).not_found()))?;

    indexing::spawn_refresh(&state, ContentRef::answer(answer_id));

    Ok(Json(DataResponse { data: answer }))
}

/// DELETE /api/v1/answers/{id}
///
/// Owner or superuser. Removes the answer with its comments and all
/// votes/flags/revisions pointing at either.
pub async fn delete_answer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(answer_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = AnswerRepo::find_by_id(&state.pool, answer_id)
        .await?
        .ok_or_else(|| AppError::Core(ContentRef::answer(answer_id).not_found()))?;

    if existing.user_id != auth.user_id && !auth.is_superuser() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the answer owner can delete it".into(),
        )));
    }

    let comments = CommentRepo::list_for_answer(&state.pool, answer_id).await?;

    let deleted = AnswerRepo::delete(&state.pool, answer_id).await?;
    if !deleted {
        return Err(AppError::Core(ContentRef::answer(answer_id).not_found()));
    }

    tracing::info!(answer_id, user_id = auth.user_id, "Answer deleted");

    indexing::spawn_remove(&state, ContentRef::answer(answer_id));
    for comment in &comments {
        indexing::spawn_remove(&state, ContentRef::comment(comment.id));
    }

    Ok(StatusCode::NO_CONTENT)
}
