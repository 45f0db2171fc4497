//! Repository for the `answers` table.

use sqlx::PgPool;

use quorum_core::content::{ContentKind, ContentRef};
use quorum_core::reputation::ReputationEvent;
use quorum_core::types::{DbId, Timestamp};

use crate::models::answer::{AcceptOutcome, Answer, CreateAnswer, UpdateAnswer};
use crate::repositories::{ProfileRepo, RevisionRepo};

const COLUMNS: &str = "id, question_id, user_id, body, is_accepted, upvotes, downvotes, \
                       flag_penalty_applied, created_at, updated_at";

/// Provides CRUD and acceptance operations for answers.
pub struct AnswerRepo;

impl AnswerRepo {
    /// Insert an answer, record its initial revision, and award the
    /// author +10 reputation in one transaction. Returns `None` when the
    /// question does not exist.
    pub async fn create(
        pool: &PgPool,
        question_id: DbId,
        user_id: DbId,
        input: &CreateAnswer,
    ) -> Result<Option<Answer>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM questions WHERE id = $1)")
                .bind(question_id)
                .fetch_one(&mut *tx)
                .await?;
        if !exists {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO answers (question_id, user_id, body)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let answer = sqlx::query_as::<_, Answer>(&query)
            .bind(question_id)
            .bind(user_id)
            .bind(&input.body)
            .fetch_one(&mut *tx)
            .await?;

        RevisionRepo::snapshot(
            &mut *tx,
            ContentRef::answer(answer.id),
            None,
            &answer.body,
            user_id,
        )
        .await?;

        let delta = ReputationEvent::ContentCreated(ContentKind::Answer).owner_delta();
        ProfileRepo::adjust_reputation(&mut *tx, user_id, delta).await?;

        tx.commit().await?;
        Ok(Some(answer))
    }

    /// Find an answer row by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers WHERE id = $1");
        sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Mark an answer accepted. Only the question owner may accept; a
    /// previously accepted answer on the same question is demoted, and
    /// the answer author earns +15 reputation exactly once.
    pub async fn accept(
        pool: &PgPool,
        answer_id: DbId,
        acting_user: DbId,
    ) -> Result<AcceptOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some((question_id, question_owner, already_accepted)) =
            sqlx::query_as::<_, (DbId, DbId, bool)>(
                "SELECT a.question_id, q.user_id, a.is_accepted
                 FROM answers a
                 JOIN questions q ON q.id = a.question_id
                 WHERE a.id = $1
                 FOR UPDATE OF a",
            )
            .bind(answer_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(AcceptOutcome::Missing);
        };

        if acting_user != question_owner {
            return Ok(AcceptOutcome::NotQuestionOwner);
        }

        if already_accepted {
            let query = format!("SELECT {COLUMNS} FROM answers WHERE id = $1");
            let answer = sqlx::query_as::<_, Answer>(&query)
                .bind(answer_id)
                .fetch_one(&mut *tx)
                .await?;
            return Ok(AcceptOutcome::AlreadyAccepted(answer));
        }

        sqlx::query(
            "UPDATE answers SET is_accepted = FALSE, updated_at = NOW()
             WHERE question_id = $1 AND is_accepted",
        )
        .bind(question_id)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "UPDATE answers SET is_accepted = TRUE, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let answer = sqlx::query_as::<_, Answer>(&query)
            .bind(answer_id)
            .fetch_one(&mut *tx)
            .await?;

        let delta = ReputationEvent::AnswerAccepted.owner_delta();
        ProfileRepo::adjust_reputation(&mut *tx, answer.user_id, delta).await?;

        tx.commit().await?;
        Ok(AcceptOutcome::Accepted(answer))
    }

    /// Apply an owner edit with a revision snapshot. Returns `None` when
    /// the answer does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAnswer,
        edited_by: DbId,
    ) -> Result<Option<Answer>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE answers SET body = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(answer) = sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .bind(&input.body)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        RevisionRepo::snapshot(
            &mut *tx,
            ContentRef::answer(id),
            None,
            &answer.body,
            edited_by,
        )
        .await?;

        tx.commit().await?;
        Ok(Some(answer))
    }

    /// Delete an answer along with its comments and every vote, flag, and
    /// revision pointing at either.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let comment_ids =
            sqlx::query_scalar::<_, DbId>("SELECT id FROM comments WHERE answer_id = $1")
                .bind(id)
                .fetch_all(&mut *tx)
                .await?;

        for table in ["votes", "flags", "revisions"] {
            let query = format!(
                "DELETE FROM {table}
                 WHERE (target_type = 'answer' AND target_id = $1)
                    OR (target_type = 'comment' AND target_id = ANY($2))"
            );
            sqlx::query(&query)
                .bind(id)
                .bind(&comment_ids)
                .execute(&mut *tx)
                .await?;
        }

        let result = sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// All answers for one question, accepted first.
    pub async fn list_for_question(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<Vec<Answer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM answers
             WHERE question_id = $1
             ORDER BY is_accepted DESC, upvotes - downvotes DESC, created_at ASC"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(question_id)
            .fetch_all(pool)
            .await
    }

    /// Answers a user has posted since the given instant.
    pub async fn count_created_since(
        pool: &PgPool,
        user_id: DbId,
        since: Timestamp,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM answers WHERE user_id = $1 AND created_at >= $2",
        )
        .bind(user_id)
        .bind(since)
        .fetch_one(pool)
        .await
    }
}
