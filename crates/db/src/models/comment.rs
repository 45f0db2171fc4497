//! Comment model and DTOs. A comment hangs off exactly one parent, a
//! question or an answer.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use quorum_core::types::{DbId, Timestamp};

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub user_id: DbId,
    pub body: String,
    pub question_id: Option<DbId>,
    pub answer_id: Option<DbId>,
    pub upvotes: i64,
    pub downvotes: i64,
    pub flag_penalty_applied: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for posting a comment on a question or an answer.
#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub body: String,
}

/// DTO for owner-only comment edits.
#[derive(Debug, Deserialize)]
pub struct UpdateComment {
    pub body: String,
}
