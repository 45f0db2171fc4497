//! Profile model: per-user reputation and optional contact fields.

use serde::Serialize;
use sqlx::FromRow;

use quorum_core::types::{DbId, Timestamp};

/// A row from the `profiles` table. `reputation` is mutated only by the
/// Reputation Engine via clamped atomic increments.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub user_id: DbId,
    pub mobile_number: Option<String>,
    pub city: Option<String>,
    pub reputation: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
