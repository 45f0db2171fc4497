//! Handlers for the `/questions` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use quorum_core::content::ContentRef;
use quorum_core::error::CoreError;
use quorum_core::types::DbId;
use quorum_db::models::question::{CreateQuestion, UpdateQuestion};
use quorum_db::repositories::{AnswerRepo, CommentRepo, QuestionRepo, TagRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::check_content;
use crate::indexing;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::rate_limit;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/questions
///
/// List questions, newest first.
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let questions = QuestionRepo::list(
        &state.pool,
        params.limit_or(20),
        params.offset_or_zero(),
    )
    .await?;

    Ok(Json(DataResponse { data: questions }))
}

/// POST /api/v1/questions
///
/// Post a question. Validates the content, enforces the hourly limit,
/// awards +20 reputation, and records the initial revision.
pub async fn create_question(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateQuestion>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".into()));
    }
    if input.body.trim().is_empty() {
        return Err(AppError::BadRequest("body must not be empty".into()));
    }
    check_content(&input.title, &auth)?;
    check_content(&input.body, &auth)?;

    let recent =
        QuestionRepo::count_created_since(&state.pool, auth.user_id, rate_limit::window_start())
            .await?;
    rate_limit::check(recent, rate_limit::QUESTIONS_PER_HOUR, "questions")
        .map_err(AppError::Core)?;

    let question = QuestionRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        question_id = question.id,
        user_id = auth.user_id,
        author = %auth.username,
        "Question created"
    );

    indexing::spawn_refresh(&state, ContentRef::question(question.id));
    for name in &input.tags {
        if let Some(tag) = TagRepo::find_by_name(&state.pool, name).await? {
            indexing::spawn_index_tag(&state, tag);
        }
    }

    Ok((StatusCode::CREATED, Json(DataResponse { data: question })))
}

/// GET /api/v1/questions/{id}
///
/// Question detail with author, tags, and answers. Counts a view.
pub async fn get_question(
    State(state): State<AppState>,
    Path(question_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = QuestionRepo::fetch_detail(&state.pool, question_id)
        .await?
        .ok_or_else(|| AppError::Core(ContentRef::question(question_id).not_found()))?;

    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/questions/{id}
///
/// Owner-only edit. Each applied edit produces a revision snapshot.
pub async fn update_question(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(question_id): Path<DbId>,
    Json(input): Json<UpdateQuestion>,
) -> AppResult<impl IntoResponse> {
    let existing = QuestionRepo::find_by_id(&state.pool, question_id)
        .await?
        .ok_or_else(|| AppError::Core(ContentRef::question(question_id).not_found()))?;

    if existing.user_id != auth.user_id && !auth.is_superuser() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the question owner can edit it".into(),
        )));
    }

    if let Some(title) = &input.title {
        check_content(title, &auth)?;
    }
    if let Some(body) = &input.body {
        check_content(body, &auth)?;
    }

    let question = QuestionRepo::update(&state.pool, question_id, &input, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(ContentRef::question(question_id).not_found()))?;

    indexing::spawn_refresh(&state, ContentRef::question(question_id));

    Ok(Json(DataResponse { data: question }))
}

/// DELETE /api/v1/questions/{id}
///
/// Owner or superuser. Removes the question with its answers, comments,
/// and all votes/flags/revisions pointing at any of them.
pub async fn delete_question(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(question_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = QuestionRepo::find_by_id(&state.pool, question_id)
        .await?
        .ok_or_else(|| AppError::Core(ContentRef::question(question_id).not_found()))?;

    if existing.user_id != auth.user_id && !auth.is_superuser() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the question owner can delete it".into(),
        )));
    }

    // Collect dependents before the cascade so their search documents
    // can be removed too.
    let answers = AnswerRepo::list_for_question(&state.pool, question_id).await?;
    let mut comments = CommentRepo::list_for_question(&state.pool, question_id).await?;
    for answer in &answers {
        comments.extend(CommentRepo::list_for_answer(&state.pool, answer.id).await?);
    }

    let deleted = QuestionRepo::delete(&state.pool, question_id).await?;
    if !deleted {
        return Err(AppError::Core(ContentRef::question(question_id).not_found()));
    }

    tracing::info!(question_id, user_id = auth.user_id, "Question deleted");

    indexing::spawn_remove(&state, ContentRef::question(question_id));
    for answer in &answers {
        indexing::spawn_remove(&state, ContentRef::answer(answer.id));
    }
    for comment in &comments {
        indexing::spawn_remove(&state, ContentRef::comment(comment.id));
    }

    Ok(StatusCode::NO_CONTENT)
}
