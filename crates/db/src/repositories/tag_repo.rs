//! Repository for the `tags` table and the `question_tags` junction.

use sqlx::{PgExecutor, PgPool};

use quorum_core::types::DbId;

use crate::models::tag::{Tag, TagListParams};

const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Provides tag lookup, creation-on-first-use, and question linkage.
pub struct TagRepo;

impl TagRepo {
    /// Fetch a tag by name, creating it if it does not exist. Races on
    /// first use resolve through the unique constraint.
    pub async fn get_or_create<'e, E>(executor: E, name: &str) -> Result<Tag, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO tags (name)
             VALUES ($1)
             ON CONFLICT (name) DO UPDATE SET updated_at = tags.updated_at
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(name)
            .fetch_one(executor)
            .await
    }

    /// Find a tag by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags WHERE id = $1");
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a tag by exact name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags WHERE name = $1");
        sqlx::query_as::<_, Tag>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List tags ordered by name.
    pub async fn list(pool: &PgPool, params: &TagListParams) -> Result<Vec<Tag>, sqlx::Error> {
        let limit = params.limit.unwrap_or(100).clamp(1, 500);
        let offset = params.offset.unwrap_or(0).max(0);
        let query = format!(
            "SELECT {COLUMNS} FROM tags ORDER BY name ASC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Replace the tag set linked to a question. Missing tags are created.
    pub async fn set_question_tags(
        pool: &PgPool,
        question_id: DbId,
        names: &[String],
    ) -> Result<Vec<Tag>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM question_tags WHERE question_id = $1")
            .bind(question_id)
            .execute(&mut *tx)
            .await?;

        let mut tags = Vec::with_capacity(names.len());
        for name in names {
            let tag = Self::get_or_create(&mut *tx, name).await?;
            sqlx::query(
                "INSERT INTO question_tags (question_id, tag_id)
                 VALUES ($1, $2)
                 ON CONFLICT DO NOTHING",
            )
            .bind(question_id)
            .bind(tag.id)
            .execute(&mut *tx)
            .await?;
            tags.push(tag);
        }

        tx.commit().await?;
        Ok(tags)
    }

    /// Tag names linked to a question, ordered by name.
    pub async fn names_for_question<'e, E>(
        executor: E,
        question_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, String>(
            "SELECT t.name FROM tags t
             JOIN question_tags qt ON qt.tag_id = t.id
             WHERE qt.question_id = $1
             ORDER BY t.name ASC",
        )
        .bind(question_id)
        .fetch_all(executor)
        .await
    }
}
