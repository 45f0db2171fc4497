//! Flag/moderation rules.
//!
//! A user may hold at most one unresolved flag per content item. When the
//! total flag count on one item reaches [`FLAG_PENALTY_THRESHOLD`], the
//! item's owner takes a one-time reputation penalty; the penalty is armed
//! by a per-item boolean so later flags never re-apply it.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Open-flag count at which the one-time owner penalty fires.
pub const FLAG_PENALTY_THRESHOLD: i64 = 6;

/// Why a content item was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagReason {
    Spam,
    Inappropriate,
    OffTopic,
    Other,
}

impl FlagReason {
    /// Stable wire/database name.
    pub fn as_str(self) -> &'static str {
        match self {
            FlagReason::Spam => "spam",
            FlagReason::Inappropriate => "inappropriate",
            FlagReason::OffTopic => "off_topic",
            FlagReason::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "spam" => Ok(FlagReason::Spam),
            "inappropriate" => Ok(FlagReason::Inappropriate),
            "off_topic" => Ok(FlagReason::OffTopic),
            "other" => Ok(FlagReason::Other),
            other => Err(CoreError::Validation(format!(
                "Invalid flag reason '{other}'. Must be one of: spam, inappropriate, off_topic, other"
            ))),
        }
    }
}

/// Whether filing a flag that brings the total to `flag_count` should
/// apply the owner penalty. Exactly-once: the penalty never fires again
/// once `penalty_applied` is set.
pub fn penalty_due(flag_count: i64, penalty_applied: bool) -> bool {
    flag_count >= FLAG_PENALTY_THRESHOLD && !penalty_applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_reason_round_trip() {
        for reason in [
            FlagReason::Spam,
            FlagReason::Inappropriate,
            FlagReason::OffTopic,
            FlagReason::Other,
        ] {
            assert_eq!(FlagReason::parse(reason.as_str()).unwrap(), reason);
        }
        assert_matches!(FlagReason::parse("bogus"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_penalty_fires_at_threshold_only_once() {
        assert!(!penalty_due(5, false));
        // The sixth flag fires the penalty.
        assert!(penalty_due(6, false));
        // A seventh flag is accepted but does not re-apply it.
        assert!(!penalty_due(7, true));
        assert!(!penalty_due(6, true));
    }
}
