//! Repository for the `flags` table.
//!
//! `file` locks the target row before counting open flags, so two
//! filings that both land on the threshold cannot each apply the
//! reputation penalty.

use sqlx::PgPool;

use quorum_core::content::ContentRef;
use quorum_core::moderation::{self, FlagReason};
use quorum_core::reputation::ReputationEvent;
use quorum_core::types::DbId;

use crate::models::flag::{FileOutcome, Flag};
use crate::repositories::ProfileRepo;

const COLUMNS: &str =
    "id, user_id, target_type, target_id, reason, description, resolved, created_at, updated_at";

/// Provides flag filing, resolution, and moderation listings.
pub struct FlagRepo;

impl FlagRepo {
    /// File a flag against a content item. At most one unresolved flag
    /// per (reporter, target); when the open-flag count reaches the
    /// threshold the owner takes a one-time -100 penalty.
    pub async fn file(
        pool: &PgPool,
        reporter: DbId,
        target: ContentRef,
        reason: FlagReason,
        description: Option<&str>,
    ) -> Result<FileOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let target_query = format!(
            "SELECT user_id, flag_penalty_applied FROM {} WHERE id = $1 FOR UPDATE",
            target.kind.table()
        );
        let Some((owner, penalty_applied)) = sqlx::query_as::<_, (DbId, bool)>(&target_query)
            .bind(target.id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(FileOutcome::TargetMissing);
        };

        let duplicate = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                 SELECT 1 FROM flags
                 WHERE user_id = $1 AND target_type = $2 AND target_id = $3 AND NOT resolved
             )",
        )
        .bind(reporter)
        .bind(target.kind.as_str())
        .bind(target.id)
        .fetch_one(&mut *tx)
        .await?;
        if duplicate {
            return Ok(FileOutcome::Duplicate);
        }

        let insert = format!(
            "INSERT INTO flags (user_id, target_type, target_id, reason, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let flag = sqlx::query_as::<_, Flag>(&insert)
            .bind(reporter)
            .bind(target.kind.as_str())
            .bind(target.id)
            .bind(reason.as_str())
            .bind(description)
            .fetch_one(&mut *tx)
            .await?;

        let total_flags = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM flags
             WHERE target_type = $1 AND target_id = $2 AND NOT resolved",
        )
        .bind(target.kind.as_str())
        .bind(target.id)
        .fetch_one(&mut *tx)
        .await?;

        let apply_penalty = moderation::penalty_due(total_flags, penalty_applied);
        if apply_penalty {
            let mark = format!(
                "UPDATE {} SET flag_penalty_applied = TRUE WHERE id = $1",
                target.kind.table()
            );
            sqlx::query(&mark).bind(target.id).execute(&mut *tx).await?;

            let delta = ReputationEvent::FlagThresholdReached.owner_delta();
            ProfileRepo::adjust_reputation(&mut *tx, owner, delta).await?;
        }

        tx.commit().await?;
        tracing::debug!(
            reporter,
            target_id = target.id,
            total_flags,
            penalty = apply_penalty,
            "flag recorded"
        );
        Ok(FileOutcome::Filed {
            flag,
            total_flags,
            penalty_applied: apply_penalty,
        })
    }

    /// Mark one flag resolved. Returns `false` when no open flag matched.
    pub async fn resolve(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE flags SET resolved = TRUE, updated_at = NOW()
             WHERE id = $1 AND NOT resolved",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All flags on one target, newest first.
    pub async fn list_for_target(
        pool: &PgPool,
        target: ContentRef,
    ) -> Result<Vec<Flag>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM flags
             WHERE target_type = $1 AND target_id = $2
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Flag>(&query)
            .bind(target.kind.as_str())
            .bind(target.id)
            .fetch_all(pool)
            .await
    }

    /// Every unresolved flag, oldest first, for the moderation queue.
    pub async fn list_open(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Flag>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM flags
             WHERE NOT resolved
             ORDER BY created_at ASC, id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Flag>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
