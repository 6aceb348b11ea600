//! Classified commit record.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::CommitType;

/// The structured form of a commit summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The commit type.
    pub r#type: CommitType,

    /// The optional scope. Never `Some("")`.
    pub scope: Option<String>,

    /// The description following the `type(scope): ` prefix, or the whole summary for
    /// non-conforming commits.
    pub message: String,
}

impl Classification {
    /// Creates a classification, treating an empty scope as absent.
    #[must_use]
    pub fn new(r#type: CommitType, scope: Option<String>, message: impl Into<String>) -> Self {
        Self {
            r#type,
            scope: scope.filter(|s| !s.is_empty()),
            message: message.into(),
        }
    }

    /// The fallback classification for a summary that does not follow the convention.
    #[must_use]
    pub fn ugly(summary: impl Into<String>) -> Self {
        Self {
            r#type: CommitType::Ugly,
            scope: None,
            message: summary.into(),
        }
    }
}

/// A classified commit, as it flows through filtering, sorting and rendering.
///
/// Records are immutable once built; later stages only drop or reorder them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    r#type: CommitType,
    scope: Option<String>,
    message: String,
    timestamp: DateTime<FixedOffset>,
}

impl CommitRecord {
    /// Creates a record from a classification and the commit time.
    #[must_use]
    pub fn new(classification: Classification, timestamp: DateTime<FixedOffset>) -> Self {
        let Classification {
            r#type,
            scope,
            message,
        } = classification;
        Self {
            r#type,
            scope,
            message,
            timestamp,
        }
    }

    /// Returns the commit type.
    #[must_use]
    pub fn commit_type(&self) -> CommitType {
        self.r#type
    }

    /// Returns the scope, if any.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the commit time.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }
}
