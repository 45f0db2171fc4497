//! Repository for the `questions` table.
//!
//! Creation, edits, and deletion run in single transactions so the
//! reputation award, the revision snapshot, and the polymorphic cascade
//! can never partially apply.

use sqlx::PgPool;

use quorum_core::content::{ContentKind, ContentRef};
use quorum_core::reputation::ReputationEvent;
use quorum_core::types::{DbId, Timestamp};

use crate::models::answer::AnswerSummary;
use crate::models::question::{CreateQuestion, Question, QuestionDetail, UpdateQuestion};
use crate::repositories::{ProfileRepo, RevisionRepo, TagRepo};

const COLUMNS: &str = "id, user_id, title, body, views_count, upvotes, downvotes, \
                       flag_penalty_applied, created_at, updated_at";

/// Provides CRUD operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a question, link its tags (created on first use), record the
    /// initial revision, and award the author +20 reputation, all in one
    /// transaction.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateQuestion,
    ) -> Result<Question, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO questions (user_id, title, body)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.body)
            .fetch_one(&mut *tx)
            .await?;

        for name in &input.tags {
            let tag = TagRepo::get_or_create(&mut *tx, name).await?;
            sqlx::query(
                "INSERT INTO question_tags (question_id, tag_id)
                 VALUES ($1, $2)
                 ON CONFLICT DO NOTHING",
            )
            .bind(question.id)
            .bind(tag.id)
            .execute(&mut *tx)
            .await?;
        }

        RevisionRepo::snapshot(
            &mut *tx,
            ContentRef::question(question.id),
            Some(&question.title),
            &question.body,
            user_id,
        )
        .await?;

        let delta = ReputationEvent::ContentCreated(ContentKind::Question).owner_delta();
        ProfileRepo::adjust_reputation(&mut *tx, user_id, delta).await?;

        tx.commit().await?;
        Ok(question)
    }

    /// Find a question row by ID without counting a view.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the detail payload for one question, counting a view. The
    /// view count bumps atomically in SQL so concurrent reads never lose
    /// an increment.
    pub async fn fetch_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<QuestionDetail>, sqlx::Error> {
        let query = format!(
            "UPDATE questions SET views_count = views_count + 1
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(question) = sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let author = sqlx::query_scalar::<_, String>("SELECT username FROM users WHERE id = $1")
            .bind(question.user_id)
            .fetch_one(pool)
            .await?;

        let tags = TagRepo::names_for_question(pool, id).await?;

        let answers = sqlx::query_as::<_, AnswerSummary>(
            "SELECT a.id, a.body, u.username AS author, a.is_accepted, a.upvotes, a.downvotes
             FROM answers a
             JOIN users u ON u.id = a.user_id
             WHERE a.question_id = $1
             ORDER BY a.is_accepted DESC, a.upvotes - a.downvotes DESC, a.created_at ASC",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(QuestionDetail {
            question,
            author,
            tags,
            answers,
        }))
    }

    /// Apply an owner edit. Only provided fields change; a revision
    /// snapshot of the post-edit state is recorded in the same
    /// transaction. Returns `None` when the question does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuestion,
        edited_by: DbId,
    ) -> Result<Option<Question>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE questions
             SET title = COALESCE($2, title),
                 body = COALESCE($3, body),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(question) = sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.body.as_deref())
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        RevisionRepo::snapshot(
            &mut *tx,
            ContentRef::question(id),
            Some(&question.title),
            &question.body,
            edited_by,
        )
        .await?;

        tx.commit().await?;
        Ok(Some(question))
    }

    /// Delete a question along with its answers, comments, and every
    /// vote, flag, and revision pointing at any of them. Returns `false`
    /// when no row existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let answer_ids = sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM answers WHERE question_id = $1",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        let comment_ids = sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM comments WHERE question_id = $1 OR answer_id = ANY($2)",
        )
        .bind(id)
        .bind(&answer_ids)
        .fetch_all(&mut *tx)
        .await?;

        for table in ["votes", "flags", "revisions"] {
            let query = format!(
                "DELETE FROM {table}
                 WHERE (target_type = 'question' AND target_id = $1)
                    OR (target_type = 'answer' AND target_id = ANY($2))
                    OR (target_type = 'comment' AND target_id = ANY($3))"
            );
            sqlx::query(&query)
                .bind(id)
                .bind(&answer_ids)
                .bind(&comment_ids)
                .execute(&mut *tx)
                .await?;
        }

        // Comments and answers cascade via their FKs; question_tags too.
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// List questions, newest first.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Questions a user has posted since the given instant. Feeds the
    /// per-hour rate limit.
    pub async fn count_created_since(
        pool: &PgPool,
        user_id: DbId,
        since: Timestamp,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM questions WHERE user_id = $1 AND created_at >= $2",
        )
        .bind(user_id)
        .bind(since)
        .fetch_one(pool)
        .await
    }
}
