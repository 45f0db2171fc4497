//! Search proxy handlers.
//!
//! Queries go to Meilisearch through the backend rather than exposing
//! the engine to clients. Results come back as fixed 10-hit pages whose
//! `next_page` wraps to 1 from the last page.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use quorum_search::documents::{
    AnswerDoc, CommentDoc, QuestionDoc, TagDoc, ANSWER_INDEX, COMMENT_INDEX, QUESTION_INDEX,
    TAG_INDEX,
};
use quorum_search::{SearchPage, SortOrder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/search/questions
pub async fn search_questions(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    run_search::<QuestionDoc>(&state, QUESTION_INDEX, &params).await
}

/// GET /api/v1/search/answers
pub async fn search_answers(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    run_search::<AnswerDoc>(&state, ANSWER_INDEX, &params).await
}

/// GET /api/v1/search/comments
pub async fn search_comments(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    run_search::<CommentDoc>(&state, COMMENT_INDEX, &params).await
}

/// GET /api/v1/search/tags
pub async fn search_tags(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    run_search::<TagDoc>(&state, TAG_INDEX, &params).await
}

async fn run_search<T>(
    state: &AppState,
    index: &str,
    params: &SearchParams,
) -> AppResult<Json<DataResponse<SearchPage<T>>>>
where
    T: DeserializeOwned + Serialize + Send + Sync + 'static,
{
    let page = params.page.unwrap_or(1);

    let results = match params.sort {
        Some(field) => {
            let order = params.order.unwrap_or(SortOrder::Desc);
            state
                .search
                .search_sorted::<T>(index, &params.q, page, field, order)
                .await?
        }
        None => state.search.search::<T>(index, &params.q, page).await?,
    };

    Ok(Json(DataResponse { data: results }))
}
