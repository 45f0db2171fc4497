//! Repository for the `revisions` table (version tracker).

use sqlx::{PgExecutor, PgPool};

use quorum_core::content::ContentRef;
use quorum_core::types::DbId;

use crate::models::revision::Revision;

const COLUMNS: &str = "id, target_type, target_id, title, body, edited_by, created_at";

/// Provides append-only revision snapshots.
pub struct RevisionRepo;

impl RevisionRepo {
    /// Append one snapshot for a content item. Runs on any executor so
    /// content writes can snapshot inside their own transaction.
    pub async fn snapshot<'e, E>(
        executor: E,
        target: ContentRef,
        title: Option<&str>,
        body: &str,
        edited_by: DbId,
    ) -> Result<Revision, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO revisions (target_type, target_id, title, body, edited_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Revision>(&query)
            .bind(target.kind.as_str())
            .bind(target.id)
            .bind(title)
            .bind(body)
            .bind(edited_by)
            .fetch_one(executor)
            .await
    }

    /// Full edit history for one content item, oldest first.
    pub async fn list_for_target(
        pool: &PgPool,
        target: ContentRef,
    ) -> Result<Vec<Revision>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM revisions
             WHERE target_type = $1 AND target_id = $2
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Revision>(&query)
            .bind(target.kind.as_str())
            .bind(target.id)
            .fetch_all(pool)
            .await
    }
}
