//! Version-tracker snapshot model.

use serde::Serialize;
use sqlx::FromRow;

use quorum_core::types::{DbId, Timestamp};

/// A row from the `revisions` table: the state of a content item as of
/// one mutating write.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Revision {
    pub id: DbId,
    pub target_type: String,
    pub target_id: DbId,
    pub title: Option<String>,
    pub body: String,
    pub edited_by: DbId,
    pub created_at: Timestamp,
}
