//! Vote-ledger transition rules.
//!
//! A user holds at most one vote per content item. The only legal moves
//! are casting a first vote or switching an existing vote to the opposite
//! type; re-casting the same type is rejected and no unvote operation
//! exists. The rules here are pure; the db crate applies them inside a
//! single transaction.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Vote direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Up,
    Down,
}

impl VoteKind {
    /// Stable wire/database name (`"up"` / `"down"`).
    pub fn as_str(self) -> &'static str {
        match self {
            VoteKind::Up => "up",
            VoteKind::Down => "down",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            VoteKind::Up => VoteKind::Down,
            VoteKind::Down => VoteKind::Up,
        }
    }

    /// Parse a stored vote type.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "up" => Ok(VoteKind::Up),
            "down" => Ok(VoteKind::Down),
            other => Err(CoreError::Internal(format!(
                "Unknown vote type '{other}' in vote ledger"
            ))),
        }
    }
}

/// Outcome of applying a requested vote against the prior ledger state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTransition {
    /// No prior vote existed; a new vote row is created.
    Created(VoteKind),
    /// A prior vote of the opposite type is flipped in place.
    Switched { from: VoteKind, to: VoteKind },
}

impl VoteTransition {
    /// The vote type held after the transition.
    pub fn resulting_kind(self) -> VoteKind {
        match self {
            VoteTransition::Created(kind) => kind,
            VoteTransition::Switched { to, .. } => to,
        }
    }

    /// `(upvote_delta, downvote_delta)` to apply to the target's counters.
    ///
    /// A switch always changes the pair by (+1, -1) or (-1, +1); counters
    /// are floored at zero by the store.
    pub fn counter_deltas(self) -> (i64, i64) {
        match self {
            VoteTransition::Created(VoteKind::Up) => (1, 0),
            VoteTransition::Created(VoteKind::Down) => (0, 1),
            VoteTransition::Switched {
                from: VoteKind::Down,
                to: VoteKind::Up,
            } => (1, -1),
            VoteTransition::Switched {
                from: VoteKind::Up,
                to: VoteKind::Down,
            } => (-1, 1),
            // from == to never leaves `transition`.
            VoteTransition::Switched { .. } => (0, 0),
        }
    }
}

/// Decide what a requested vote does given the voter's prior vote on the
/// same target.
///
/// Rejects a same-type repeat as a conflict; self-voting is rejected
/// earlier via [`forbid_self_vote`] before the ledger is consulted.
pub fn transition(
    prior: Option<VoteKind>,
    requested: VoteKind,
) -> Result<VoteTransition, CoreError> {
    match prior {
        None => Ok(VoteTransition::Created(requested)),
        Some(existing) if existing == requested => Err(CoreError::Conflict(format!(
            "You have already {}voted this item",
            requested.as_str()
        ))),
        Some(existing) => Ok(VoteTransition::Switched {
            from: existing,
            to: requested,
        }),
    }
}

/// Self-voting on an owned item is always rejected, regardless of prior
/// vote state.
pub fn forbid_self_vote(voter: DbId, owner: DbId) -> Result<(), CoreError> {
    if voter == owner {
        return Err(CoreError::Forbidden(
            "You cannot vote on your own content".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_first_vote_creates() {
        let t = transition(None, VoteKind::Up).unwrap();
        assert_eq!(t, VoteTransition::Created(VoteKind::Up));
        assert_eq!(t.counter_deltas(), (1, 0));

        let t = transition(None, VoteKind::Down).unwrap();
        assert_eq!(t.counter_deltas(), (0, 1));
    }

    #[test]
    fn test_same_type_repeat_rejected() {
        assert_matches!(
            transition(Some(VoteKind::Up), VoteKind::Up),
            Err(CoreError::Conflict(_))
        );
        assert_matches!(
            transition(Some(VoteKind::Down), VoteKind::Down),
            Err(CoreError::Conflict(_))
        );
    }

    #[test]
    fn test_switch_is_plus_one_minus_one() {
        let t = transition(Some(VoteKind::Down), VoteKind::Up).unwrap();
        assert_eq!(
            t,
            VoteTransition::Switched {
                from: VoteKind::Down,
                to: VoteKind::Up
            }
        );
        // Switching DOWN -> UP changes (upvotes, downvotes) by (+1, -1),
        // never any other delta.
        assert_eq!(t.counter_deltas(), (1, -1));

        let t = transition(Some(VoteKind::Up), VoteKind::Down).unwrap();
        assert_eq!(t.counter_deltas(), (-1, 1));
    }

    #[test]
    fn test_self_vote_always_forbidden() {
        assert_matches!(forbid_self_vote(3, 3), Err(CoreError::Forbidden(_)));
        assert!(forbid_self_vote(3, 4).is_ok());
    }

    #[test]
    fn test_vote_kind_round_trip() {
        assert_eq!(VoteKind::parse("up").unwrap(), VoteKind::Up);
        assert_eq!(VoteKind::parse("down").unwrap(), VoteKind::Down);
        assert_eq!(VoteKind::Up.opposite(), VoteKind::Down);
        assert_matches!(VoteKind::parse("sideways"), Err(CoreError::Internal(_)));
    }
}
