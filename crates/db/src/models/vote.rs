//! Vote ledger row and cast outcomes.

use serde::Serialize;
use sqlx::FromRow;

use quorum_core::types::{DbId, Timestamp};
use quorum_core::voting::VoteTransition;

/// A row from the `votes` table. `target_type` / `vote_type` hold the
/// stable names from `ContentKind` / `VoteKind`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vote {
    pub id: DbId,
    pub user_id: DbId,
    pub target_type: String,
    pub target_id: DbId,
    pub vote_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Result of `VoteRepo::cast`. Domain rejections are data, not sqlx
/// errors; the handler maps them onto the HTTP taxonomy.
#[derive(Debug)]
pub enum CastOutcome {
    /// The vote was created or switched; carries the post-transaction
    /// counters for the response payload.
    Cast {
        vote: Vote,
        transition: VoteTransition,
        upvotes: i64,
        downvotes: i64,
    },
    /// The voter already holds a vote of the requested type.
    AlreadyCast,
    /// The voter has exhausted their hourly vote budget.
    RateLimited,
    /// The voter owns the target.
    SelfVote,
    /// No row with the target id exists.
    TargetMissing,
}
