//! Answer model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use quorum_core::types::{DbId, Timestamp};

/// A row from the `answers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Answer {
    pub id: DbId,
    pub question_id: DbId,
    pub user_id: DbId,
    pub body: String,
    pub is_accepted: bool,
    pub upvotes: i64,
    pub downvotes: i64,
    pub flag_penalty_applied: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Answer embedded in a question detail response, with the author name
/// resolved.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnswerSummary {
    pub id: DbId,
    pub body: String,
    pub author: String,
    pub is_accepted: bool,
    pub upvotes: i64,
    pub downvotes: i64,
}

/// Result of `AnswerRepo::accept`.
#[derive(Debug)]
pub enum AcceptOutcome {
    /// The answer is now the accepted one for its question.
    Accepted(Answer),
    /// The answer was already accepted; nothing changed.
    AlreadyAccepted(Answer),
    /// The caller does not own the question.
    NotQuestionOwner,
    /// No answer with that id exists.
    Missing,
}

/// DTO for `POST /questions/{id}/answers`.
#[derive(Debug, Deserialize)]
pub struct CreateAnswer {
    pub body: String,
}

/// DTO for owner-only answer edits.
#[derive(Debug, Deserialize)]
pub struct UpdateAnswer {
    pub body: String,
}
