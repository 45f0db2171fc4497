//! Content-item kinds and tagged target references.
//!
//! Votes, flags, and revisions all point at "a question, an answer, or a
//! comment". The target is a tagged variant rather than three nullable
//! foreign keys, so an all-null or multi-set target cannot be represented.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// The three user-authored, votable/flaggable content kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Question,
    Answer,
    Comment,
}

impl ContentKind {
    /// Stable wire/database name for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Question => "question",
            ContentKind::Answer => "answer",
            ContentKind::Comment => "comment",
        }
    }

    /// The table holding rows of this kind.
    pub fn table(self) -> &'static str {
        match self {
            ContentKind::Question => "questions",
            ContentKind::Answer => "answers",
            ContentKind::Comment => "comments",
        }
    }

    /// Display name used in error messages (`NotFound { entity, .. }`).
    pub fn entity_name(self) -> &'static str {
        match self {
            ContentKind::Question => "Question",
            ContentKind::Answer => "Answer",
            ContentKind::Comment => "Comment",
        }
    }

    /// Parse a wire/database kind name.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "question" => Ok(ContentKind::Question),
            "answer" => Ok(ContentKind::Answer),
            "comment" => Ok(ContentKind::Comment),
            other => Err(CoreError::Validation(format!(
                "Invalid content type '{other}'. Must be one of: question, answer, comment"
            ))),
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An owned reference to one content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRef {
    pub kind: ContentKind,
    pub id: DbId,
}

impl ContentRef {
    pub fn question(id: DbId) -> Self {
        Self {
            kind: ContentKind::Question,
            id,
        }
    }

    pub fn answer(id: DbId) -> Self {
        Self {
            kind: ContentKind::Answer,
            id,
        }
    }

    pub fn comment(id: DbId) -> Self {
        Self {
            kind: ContentKind::Comment,
            id,
        }
    }

    /// Build a reference from the `(target_type, target_id)` pair used on
    /// the wire and in the votes/flags/revisions tables.
    pub fn from_parts(kind: &str, id: DbId) -> Result<Self, CoreError> {
        Ok(Self {
            kind: ContentKind::parse(kind)?,
            id,
        })
    }

    /// `NotFound` error for this target.
    pub fn not_found(self) -> CoreError {
        CoreError::NotFound {
            entity: self.kind.entity_name(),
            id: self.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_kind_round_trip() {
        for kind in [ContentKind::Question, ContentKind::Answer, ContentKind::Comment] {
            assert_eq!(ContentKind::parse(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn test_invalid_kind_rejected() {
        assert_matches!(ContentKind::parse("post"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_ref_from_parts() {
        let target = ContentRef::from_parts("answer", 7).unwrap();
        assert_eq!(target, ContentRef::answer(7));
        assert_eq!(target.kind.table(), "answers");
    }
}
