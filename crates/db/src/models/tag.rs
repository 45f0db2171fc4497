//! Tag model and DTOs. Tags are many-to-many with questions via the
//! `question_tags` junction table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use quorum_core::types::{DbId, Timestamp};

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Query parameters for `GET /tags`.
#[derive(Debug, Deserialize)]
pub struct TagListParams {
    /// Maximum results. Defaults to 100.
    pub limit: Option<i64>,
    /// Offset for pagination.
    pub offset: Option<i64>,
}
