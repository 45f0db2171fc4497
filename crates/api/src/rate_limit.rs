//! Per-user hourly action limits.
//!
//! Limits are enforced by counting the user's rows created inside a
//! sliding one-hour window, so no extra counter state is needed.

use chrono::{Duration, Utc};
use quorum_core::error::CoreError;
use quorum_core::types::Timestamp;

/// Questions a user may post per hour.
pub const QUESTIONS_PER_HOUR: i64 = 10;
/// Answers a user may post per hour.
pub const ANSWERS_PER_HOUR: i64 = 15;
/// Comments a user may post per hour.
pub const COMMENTS_PER_HOUR: i64 = 20;
/// Vote actions (casts and switches) a user may make per hour.
pub const VOTES_PER_HOUR: i64 = 30;

/// Start of the current sliding window.
pub fn window_start() -> Timestamp {
    Utc::now() - Duration::hours(1)
}

/// The 429 error for an exhausted hourly budget.
pub fn exceeded(limit: i64, action: &str) -> CoreError {
    CoreError::RateLimited(format!(
        "Limit of {limit} {action} per hour reached. Try again later."
    ))
}

/// Reject with 429 when the in-window count has reached the limit.
pub fn check(count: i64, limit: i64, action: &str) -> Result<(), CoreError> {
    if count >= limit {
        return Err(exceeded(limit, action));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_under_limit_passes() {
        assert!(check(0, QUESTIONS_PER_HOUR, "questions").is_ok());
        assert!(check(9, QUESTIONS_PER_HOUR, "questions").is_ok());
    }

    #[test]
    fn test_at_limit_rejected() {
        assert_matches!(
            check(10, QUESTIONS_PER_HOUR, "questions"),
            Err(CoreError::RateLimited(_))
        );
        assert_matches!(
            check(31, VOTES_PER_HOUR, "votes"),
            Err(CoreError::RateLimited(_))
        );
    }

    #[test]
    fn test_message_names_the_limit() {
        let err = check(20, COMMENTS_PER_HOUR, "comments").unwrap_err();
        assert!(err.to_string().contains("20 comments per hour"));
    }

    #[test]
    fn test_exceeded_builds_the_same_error() {
        // Repositories that enforce the budget in their own transaction
        // report back an outcome; the handler rebuilds the error here.
        let err = exceeded(VOTES_PER_HOUR, "votes");
        assert_matches!(err, CoreError::RateLimited(_));
        assert!(err.to_string().contains("30 votes per hour"));
    }
}
