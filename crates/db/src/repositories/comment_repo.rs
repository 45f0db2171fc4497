//! Repository for the `comments` table.

use sqlx::PgPool;

use quorum_core::content::{ContentKind, ContentRef};
use quorum_core::reputation::ReputationEvent;
use quorum_core::types::{DbId, Timestamp};

use crate::models::comment::{Comment, CreateComment, UpdateComment};
use crate::repositories::{ProfileRepo, RevisionRepo};

const COLUMNS: &str = "id, user_id, body, question_id, answer_id, upvotes, downvotes, \
                       flag_penalty_applied, created_at, updated_at";

/// The parent a new comment attaches to. The schema enforces exactly one.
#[derive(Debug, Clone, Copy)]
pub enum CommentParent {
    Question(DbId),
    Answer(DbId),
}

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment under a question or an answer, record its initial
    /// revision, and award the author +5 reputation in one transaction.
    /// Returns `None` when the parent does not exist.
    pub async fn create(
        pool: &PgPool,
        parent: CommentParent,
        user_id: DbId,
        input: &CreateComment,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (question_id, answer_id, parent_table, parent_id) = match parent {
            CommentParent::Question(id) => (Some(id), None, "questions", id),
            CommentParent::Answer(id) => (None, Some(id), "answers", id),
        };

        let exists_query =
            format!("SELECT EXISTS(SELECT 1 FROM {parent_table} WHERE id = $1)");
        let exists = sqlx::query_scalar::<_, bool>(&exists_query)
            .bind(parent_id)
            .fetch_one(&mut *tx)
            .await?;
        if !exists {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO comments (user_id, body, question_id, answer_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let comment = sqlx::query_as::<_, Comment>(&query)
            .bind(user_id)
            .bind(&input.body)
            .bind(question_id)
            .bind(answer_id)
            .fetch_one(&mut *tx)
            .await?;

        RevisionRepo::snapshot(
            &mut *tx,
            ContentRef::comment(comment.id),
            None,
            &comment.body,
            user_id,
        )
        .await?;

        let delta = ReputationEvent::ContentCreated(ContentKind::Comment).owner_delta();
        ProfileRepo::adjust_reputation(&mut *tx, user_id, delta).await?;

        tx.commit().await?;
        Ok(Some(comment))
    }

    /// Find a comment row by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply an owner edit with a revision snapshot.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComment,
        edited_by: DbId,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE comments SET body = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(comment) = sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(&input.body)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        RevisionRepo::snapshot(
            &mut *tx,
            ContentRef::comment(id),
            None,
            &comment.body,
            edited_by,
        )
        .await?;

        tx.commit().await?;
        Ok(Some(comment))
    }

    /// Delete a comment and every vote, flag, and revision pointing at it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        for table in ["votes", "flags", "revisions"] {
            let query = format!(
                "DELETE FROM {table} WHERE target_type = 'comment' AND target_id = $1"
            );
            sqlx::query(&query).bind(id).execute(&mut *tx).await?;
        }

        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// All comments under one question, oldest first.
    pub async fn list_for_question(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE question_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(question_id)
            .fetch_all(pool)
            .await
    }

    /// All comments under one answer, oldest first.
    pub async fn list_for_answer(
        pool: &PgPool,
        answer_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE answer_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(answer_id)
            .fetch_all(pool)
            .await
    }

    /// Comments a user has posted since the given instant.
    pub async fn count_created_since(
        pool: &PgPool,
        user_id: DbId,
        since: Timestamp,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM comments WHERE user_id = $1 AND created_at >= $2",
        )
        .bind(user_id)
        .bind(since)
        .fetch_one(pool)
        .await
    }
}
