//! Question model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use quorum_core::types::{DbId, Timestamp};

use crate::models::answer::AnswerSummary;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub body: String,
    pub views_count: i64,
    pub upvotes: i64,
    pub downvotes: i64,
    pub flag_penalty_applied: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Question detail payload: the row plus author name, tag names, and
/// embedded answers. Fetching it counts a view.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDetail {
    #[serde(flatten)]
    pub question: Question,
    pub author: String,
    pub tags: Vec<String>,
    pub answers: Vec<AnswerSummary>,
}

/// DTO for `POST /questions`. Tags are created on first use.
#[derive(Debug, Deserialize)]
pub struct CreateQuestion {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// DTO for owner-only edits. Only provided fields change; each applied
/// edit produces a revision snapshot.
#[derive(Debug, Deserialize)]
pub struct UpdateQuestion {
    pub title: Option<String>,
    pub body: Option<String>,
}
