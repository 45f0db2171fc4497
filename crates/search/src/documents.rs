//! Search documents, one flat struct per index.
//!
//! `created` is epoch seconds so date sorting works without a custom
//! ranking rule.

use serde::{Deserialize, Serialize};

use quorum_core::types::{DbId, Timestamp};

pub const QUESTION_INDEX: &str = "questions";
pub const ANSWER_INDEX: &str = "answers";
pub const COMMENT_INDEX: &str = "comments";
pub const TAG_INDEX: &str = "tags";

/// Primary-key attribute shared by every index.
pub const DOC_ID: &str = "id";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDoc {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub author: String,
    pub created: i64,
    pub upvotes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerDoc {
    pub id: DbId,
    pub question_id: DbId,
    pub body: String,
    pub author: String,
    pub created: i64,
    pub upvotes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDoc {
    pub id: DbId,
    pub body: String,
    pub author: String,
    pub created: i64,
    pub upvotes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagDoc {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

/// Convert a database timestamp to the sortable `created` value.
pub fn epoch_seconds(at: Timestamp) -> i64 {
    at.timestamp()
}
