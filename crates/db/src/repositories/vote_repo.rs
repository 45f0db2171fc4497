//! Repository for the vote ledger.
//!
//! `cast` is the single write path. It locks the voter row, enforces
//! the hourly budget, locks the target row and the voter's prior ledger
//! entry, applies the transition rules, bumps the denormalized counters,
//! and adjusts both reputations, all inside one transaction so
//! concurrent casts serialize instead of double-counting.

use sqlx::PgPool;

use quorum_core::content::ContentRef;
use quorum_core::reputation::ReputationEvent;
use quorum_core::types::{DbId, Timestamp};
use quorum_core::voting::{self, VoteKind};

use crate::models::vote::{CastOutcome, Vote};
use crate::repositories::ProfileRepo;

const COLUMNS: &str = "id, user_id, target_type, target_id, vote_type, created_at, updated_at";

/// Provides the vote-cast write path and ledger lookups.
pub struct VoteRepo;

impl VoteRepo {
    /// Cast or switch a vote on a content item.
    ///
    /// The hourly budget is checked inside the transaction, after
    /// locking the voter's user row, so concurrent casts by the same
    /// voter serialize and the bound is exact.
    pub async fn cast(
        pool: &PgPool,
        voter: DbId,
        target: ContentRef,
        requested: VoteKind,
        window_start: Timestamp,
        hourly_limit: i64,
    ) -> Result<CastOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT id FROM users WHERE id = $1 FOR UPDATE")
            .bind(voter)
            .execute(&mut *tx)
            .await?;

        // `updated_at` moves on both casts and switches, so one column
        // covers both actions.
        let recent = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM votes WHERE user_id = $1 AND updated_at >= $2",
        )
        .bind(voter)
        .bind(window_start)
        .fetch_one(&mut *tx)
        .await?;
        if recent >= hourly_limit {
            return Ok(CastOutcome::RateLimited);
        }

        let owner_query = format!(
            "SELECT user_id FROM {} WHERE id = $1 FOR UPDATE",
            target.kind.table()
        );
        let Some(owner) = sqlx::query_scalar::<_, DbId>(&owner_query)
            .bind(target.id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(CastOutcome::TargetMissing);
        };

        if voting::forbid_self_vote(voter, owner).is_err() {
            return Ok(CastOutcome::SelfVote);
        }

        let prior = sqlx::query_scalar::<_, String>(
            "SELECT vote_type FROM votes
             WHERE user_id = $1 AND target_type = $2 AND target_id = $3
             FOR UPDATE",
        )
        .bind(voter)
        .bind(target.kind.as_str())
        .bind(target.id)
        .fetch_optional(&mut *tx)
        .await?;

        let prior = match prior {
            Some(stored) => {
                Some(VoteKind::parse(&stored).map_err(|e| sqlx::Error::Decode(Box::new(e)))?)
            }
            None => None,
        };

        let Ok(transition) = voting::transition(prior, requested) else {
            return Ok(CastOutcome::AlreadyCast);
        };

        let vote = if prior.is_none() {
            let query = format!(
                "INSERT INTO votes (user_id, target_type, target_id, vote_type)
                 VALUES ($1, $2, $3, $4)
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, Vote>(&query)
                .bind(voter)
                .bind(target.kind.as_str())
                .bind(target.id)
                .bind(requested.as_str())
                .fetch_one(&mut *tx)
                .await?
        } else {
            let query = format!(
                "UPDATE votes SET vote_type = $4, updated_at = NOW()
                 WHERE user_id = $1 AND target_type = $2 AND target_id = $3
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, Vote>(&query)
                .bind(voter)
                .bind(target.kind.as_str())
                .bind(target.id)
                .bind(requested.as_str())
                .fetch_one(&mut *tx)
                .await?
        };

        let (up_delta, down_delta) = transition.counter_deltas();
        let counter_query = format!(
            "UPDATE {} SET upvotes = GREATEST(upvotes + $2, 0),
                          downvotes = GREATEST(downvotes + $3, 0),
                          updated_at = NOW()
             WHERE id = $1
             RETURNING upvotes, downvotes",
            target.kind.table()
        );
        let (upvotes, downvotes) = sqlx::query_as::<_, (i64, i64)>(&counter_query)
            .bind(target.id)
            .bind(up_delta)
            .bind(down_delta)
            .fetch_one(&mut *tx)
            .await?;

        let event = ReputationEvent::VoteCast {
            target: target.kind,
            transition,
        };
        let owner_delta = event.owner_delta();
        if owner_delta != 0 {
            ProfileRepo::adjust_reputation(&mut *tx, owner, owner_delta).await?;
        }
        let actor_delta = event.actor_delta();
        if actor_delta != 0 {
            ProfileRepo::adjust_reputation(&mut *tx, voter, actor_delta).await?;
        }

        tx.commit().await?;
        tracing::debug!(voter, target_id = target.id, vote_type = requested.as_str(), "vote recorded");
        Ok(CastOutcome::Cast {
            vote,
            transition,
            upvotes,
            downvotes,
        })
    }

    /// The voter's current vote on a target, if any.
    pub async fn find_for_target(
        pool: &PgPool,
        voter: DbId,
        target: ContentRef,
    ) -> Result<Option<Vote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM votes
             WHERE user_id = $1 AND target_type = $2 AND target_id = $3"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(voter)
            .bind(target.kind.as_str())
            .bind(target.id)
            .fetch_optional(pool)
            .await
    }
}
