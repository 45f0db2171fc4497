//! Fire-and-forget search indexing.
//!
//! Content writes commit to Postgres first; the matching search-document
//! upsert or delete runs in a spawned task afterwards. A failed indexing
//! task is logged and dropped, never surfaced to the client -- the index
//! is eventually consistent with the database, which stays authoritative.

use quorum_core::content::{ContentKind, ContentRef};
use quorum_db::models::tag::Tag;
use quorum_db::repositories::{AnswerRepo, CommentRepo, QuestionRepo, TagRepo, UserRepo};
use quorum_db::DbPool;
use quorum_search::documents::{
    epoch_seconds, AnswerDoc, CommentDoc, QuestionDoc, TagDoc, ANSWER_INDEX, COMMENT_INDEX,
    QUESTION_INDEX,
};
use quorum_search::SearchClient;
use std::sync::Arc;
use tracing::warn;

use crate::error::AppResult;
use crate::state::AppState;

/// Index name for a content kind.
fn index_for(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Question => QUESTION_INDEX,
        ContentKind::Answer => ANSWER_INDEX,
        ContentKind::Comment => COMMENT_INDEX,
    }
}

/// Re-read a content item from the database and upsert its search
/// document. Call after any write that changes indexed fields (create,
/// edit, vote).
pub fn spawn_refresh(state: &AppState, target: ContentRef) {
    let pool = state.pool.clone();
    let search = Arc::clone(&state.search);
    tokio::spawn(async move {
        if let Err(e) = refresh(&pool, &search, target).await {
            warn!(kind = %target.kind, id = target.id, error = %e, "search index refresh failed");
        }
    });
}

/// Remove a content item's search document after deletion.
pub fn spawn_remove(state: &AppState, target: ContentRef) {
    let search = Arc::clone(&state.search);
    tokio::spawn(async move {
        if let Err(e) = search.remove(index_for(target.kind), target.id).await {
            warn!(kind = %target.kind, id = target.id, error = %e, "search index removal failed");
        }
    });
}

/// Upsert a tag document after the tag is created or first linked.
pub fn spawn_index_tag(state: &AppState, tag: Tag) {
    let search = Arc::clone(&state.search);
    tokio::spawn(async move {
        let doc = TagDoc {
            id: tag.id,
            name: tag.name,
            description: tag.description,
        };
        if let Err(e) = search.index_tag(&doc).await {
            warn!(tag_id = doc.id, error = %e, "tag index upsert failed");
        }
    });
}

async fn refresh(pool: &DbPool, search: &SearchClient, target: ContentRef) -> AppResult<()> {
    match target.kind {
        ContentKind::Question => {
            let Some(question) = QuestionRepo::find_by_id(pool, target.id).await? else {
                return Ok(());
            };
            let Some(author) = UserRepo::find_by_id(pool, question.user_id).await? else {
                return Ok(());
            };
            let tags = TagRepo::names_for_question(pool, question.id).await?;
            search
                .index_question(&QuestionDoc {
                    id: question.id,
                    title: question.title,
                    body: question.body,
                    tags,
                    author: author.username,
                    created: epoch_seconds(question.created_at),
                    upvotes: question.upvotes,
                })
                .await?;
        }
        ContentKind::Answer => {
            let Some(answer) = AnswerRepo::find_by_id(pool, target.id).await? else {
                return Ok(());
            };
            let Some(author) = UserRepo::find_by_id(pool, answer.user_id).await? else {
                return Ok(());
            };
            search
                .index_answer(&AnswerDoc {
                    id: answer.id,
                    question_id: answer.question_id,
                    body: answer.body,
                    author: author.username,
                    created: epoch_seconds(answer.created_at),
                    upvotes: answer.upvotes,
                })
                .await?;
        }
        ContentKind::Comment => {
            let Some(comment) = CommentRepo::find_by_id(pool, target.id).await? else {
                return Ok(());
            };
            let Some(author) = UserRepo::find_by_id(pool, comment.user_id).await? else {
                return Ok(());
            };
            search
                .index_comment(&CommentDoc {
                    id: comment.id,
                    body: comment.body,
                    author: author.username,
                    created: epoch_seconds(comment.created_at),
                    upvotes: comment.upvotes,
                })
                .await?;
        }
    }
    Ok(())
}
