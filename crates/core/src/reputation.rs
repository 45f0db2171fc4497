//! Reputation delta table.
//!
//! Every lifecycle event maps to a pair of integer deltas: one for the
//! owner of the affected content and one for the acting user. Deltas are
//! applied by the store as atomic increments clamped at the floor of 1,
//! never as absolute sets.

use crate::content::ContentKind;
use crate::voting::{VoteKind, VoteTransition};

/// Reputation never falls below this value.
pub const MIN_REPUTATION: i64 = 1;

/// One-time penalty applied to a content owner when the open-flag count
/// on one item reaches the moderation threshold.
pub const FLAG_THRESHOLD_PENALTY: i64 = -100;

/// A content lifecycle event the Reputation Engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReputationEvent {
    /// A new question/answer/comment was posted.
    ContentCreated(ContentKind),
    /// The question author accepted an answer (delta goes to the answer
    /// author).
    AnswerAccepted,
    /// A vote was created or switched on a content item.
    VoteCast {
        target: ContentKind,
        transition: VoteTransition,
    },
    /// The open-flag count on one item crossed the threshold.
    FlagThresholdReached,
}

impl ReputationEvent {
    /// Delta applied to the owner of the affected content.
    pub fn owner_delta(self) -> i64 {
        use ContentKind::*;
        match self {
            ReputationEvent::ContentCreated(Question) => 20,
            ReputationEvent::ContentCreated(Answer) => 10,
            ReputationEvent::ContentCreated(Comment) => 5,
            ReputationEvent::AnswerAccepted => 15,
            ReputationEvent::VoteCast { target, transition } => match transition {
                VoteTransition::Created(VoteKind::Up) => match target {
                    Question | Answer => 5,
                    Comment => 3,
                },
                VoteTransition::Created(VoteKind::Down) => -2,
                VoteTransition::Switched {
                    from: VoteKind::Down,
                    to: VoteKind::Up,
                } => match target {
                    Question => 7,
                    Answer => 5,
                    Comment => 3,
                },
                VoteTransition::Switched {
                    from: VoteKind::Up,
                    to: VoteKind::Down,
                } => match target {
                    Question | Answer => -5,
                    Comment => -3,
                },
                VoteTransition::Switched { .. } => 0,
            },
            ReputationEvent::FlagThresholdReached => FLAG_THRESHOLD_PENALTY,
        }
    }

    /// Delta applied to the acting user (the voter). Zero for events with
    /// no actor side.
    pub fn actor_delta(self) -> i64 {
        match self {
            ReputationEvent::VoteCast { transition, .. } => {
                match transition.resulting_kind() {
                    VoteKind::Up => 1,
                    VoteKind::Down => -1,
                }
            }
            _ => 0,
        }
    }
}

/// Clamp a computed reputation value to the floor of 1.
pub fn clamp(value: i64) -> i64 {
    value.max(MIN_REPUTATION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voting::transition;

    fn upvote(target: ContentKind, prior: Option<VoteKind>) -> ReputationEvent {
        ReputationEvent::VoteCast {
            target,
            transition: transition(prior, VoteKind::Up).unwrap(),
        }
    }

    fn downvote(target: ContentKind, prior: Option<VoteKind>) -> ReputationEvent {
        ReputationEvent::VoteCast {
            target,
            transition: transition(prior, VoteKind::Down).unwrap(),
        }
    }

    #[test]
    fn test_create_deltas() {
        assert_eq!(
            ReputationEvent::ContentCreated(ContentKind::Question).owner_delta(),
            20
        );
        assert_eq!(
            ReputationEvent::ContentCreated(ContentKind::Answer).owner_delta(),
            10
        );
        assert_eq!(
            ReputationEvent::ContentCreated(ContentKind::Comment).owner_delta(),
            5
        );
        assert_eq!(
            ReputationEvent::ContentCreated(ContentKind::Question).actor_delta(),
            0
        );
    }

    #[test]
    fn test_first_upvote_deltas() {
        let event = upvote(ContentKind::Question, None);
        assert_eq!(event.owner_delta(), 5);
        assert_eq!(event.actor_delta(), 1);

        assert_eq!(upvote(ContentKind::Answer, None).owner_delta(), 5);
        assert_eq!(upvote(ContentKind::Comment, None).owner_delta(), 3);
    }

    #[test]
    fn test_first_downvote_deltas() {
        for kind in [ContentKind::Question, ContentKind::Answer, ContentKind::Comment] {
            let event = downvote(kind, None);
            assert_eq!(event.owner_delta(), -2);
            assert_eq!(event.actor_delta(), -1);
        }
    }

    #[test]
    fn test_switch_deltas() {
        assert_eq!(
            upvote(ContentKind::Question, Some(VoteKind::Down)).owner_delta(),
            7
        );
        assert_eq!(
            upvote(ContentKind::Answer, Some(VoteKind::Down)).owner_delta(),
            5
        );
        assert_eq!(
            upvote(ContentKind::Comment, Some(VoteKind::Down)).owner_delta(),
            3
        );

        assert_eq!(
            downvote(ContentKind::Question, Some(VoteKind::Up)).owner_delta(),
            -5
        );
        assert_eq!(
            downvote(ContentKind::Answer, Some(VoteKind::Up)).owner_delta(),
            -5
        );
        assert_eq!(
            downvote(ContentKind::Comment, Some(VoteKind::Up)).owner_delta(),
            -3
        );
        assert_eq!(
            downvote(ContentKind::Question, Some(VoteKind::Up)).actor_delta(),
            -1
        );
    }

    #[test]
    fn test_accept_and_flag_deltas() {
        assert_eq!(ReputationEvent::AnswerAccepted.owner_delta(), 15);
        assert_eq!(ReputationEvent::FlagThresholdReached.owner_delta(), -100);
        assert_eq!(ReputationEvent::FlagThresholdReached.actor_delta(), 0);
    }

    #[test]
    fn test_clamp_floor() {
        assert_eq!(clamp(5), 5);
        assert_eq!(clamp(1), 1);
        assert_eq!(clamp(0), 1);
        assert_eq!(clamp(-99), 1);
    }

    /// The worked scenario: A posts a question at reputation 1, B upvotes,
    /// then B switches to a downvote.
    #[test]
    fn test_question_lifecycle_scenario() {
        let mut a = 1i64;
        let mut b = 1i64;

        // A creates a question: 1 -> 21.
        a = clamp(a + ReputationEvent::ContentCreated(ContentKind::Question).owner_delta());
        assert_eq!(a, 21);

        // B upvotes: A 21 -> 26, B 1 -> 2.
        let event = upvote(ContentKind::Question, None);
        a = clamp(a + event.owner_delta());
        b = clamp(b + event.actor_delta());
        assert_eq!(a, 26);
        assert_eq!(b, 2);

        // B switches UP -> DOWN: A 26 -> 21, B 2 -> 1.
        let event = downvote(ContentKind::Question, Some(VoteKind::Up));
        a = clamp(a + event.owner_delta());
        b = clamp(b + event.actor_delta());
        assert_eq!(a, 21);
        assert_eq!(b, 1);
    }
}
