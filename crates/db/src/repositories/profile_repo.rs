//! Repository for the `profiles` table.
//!
//! Reputation is only ever changed here, as an atomic increment clamped
//! at the floor of 1, never an absolute set.

use sqlx::{PgExecutor, PgPool};

use quorum_core::types::DbId;

use crate::models::profile::Profile;

const COLUMNS: &str = "id, user_id, mobile_number, city, reputation, created_at, updated_at";

/// Provides profile lookup and reputation adjustments.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Find the profile owned by a user.
    pub async fn find_by_user(pool: &PgPool, user_id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE user_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a reputation delta as a single atomic update, clamped at the
    /// floor of 1. Returns the new reputation.
    ///
    /// Takes any executor so callers can run it inside their own
    /// transaction (vote casts, flag filings, content creation).
    pub async fn adjust_reputation<'e, E>(
        executor: E,
        user_id: DbId,
        delta: i64,
    ) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, i64>(
            "UPDATE profiles
             SET reputation = GREATEST(reputation + $2, 1), updated_at = NOW()
             WHERE user_id = $1
             RETURNING reputation",
        )
        .bind(user_id)
        .bind(delta)
        .fetch_one(executor)
        .await
    }
}
