//! Flag model and filing outcomes.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use quorum_core::moderation::FlagReason;
use quorum_core::types::{DbId, Timestamp};

/// A row from the `flags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Flag {
    pub id: DbId,
    pub user_id: DbId,
    pub target_type: String,
    pub target_id: DbId,
    pub reason: String,
    pub description: Option<String>,
    pub resolved: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `POST /flags`. Exactly one target is named by the tagged
/// (target_type, target_id) pair.
#[derive(Debug, Deserialize)]
pub struct CreateFlag {
    pub target_type: String,
    pub target_id: DbId,
    pub reason: FlagReason,
    pub description: Option<String>,
}

/// Result of `FlagRepo::file`.
#[derive(Debug)]
pub enum FileOutcome {
    /// The flag was recorded. `penalty_applied` is true only on the
    /// filing that crossed the threshold.
    Filed {
        flag: Flag,
        total_flags: i64,
        penalty_applied: bool,
    },
    /// The reporter already has an unresolved flag on this target.
    Duplicate,
    /// No row with the target id exists.
    TargetMissing,
}
