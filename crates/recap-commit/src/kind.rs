//! Commit type vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The type of a commit.
///
/// Variants are declared in priority order: `feat` ranks highest, `test` lowest among the
/// conforming types, and [`CommitType::Ugly`] comes after all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    /// A new feature.
    Feat,
    /// A revert of an earlier commit.
    Revert,
    /// A bug fix.
    Fix,
    /// Maintenance work.
    Chore,
    /// Build system changes.
    Build,
    /// CI configuration changes.
    Ci,
    /// A performance improvement.
    Perf,
    /// A code change that neither fixes a bug nor adds a feature.
    Refactor,
    /// Documentation only.
    Docs,
    /// Formatting, whitespace and the like.
    Style,
    /// Adding or fixing tests.
    Test,
    /// A summary that does not follow the Conventional Commits format.
    Ugly,
}

impl CommitType {
    /// Every type, in priority order.
    pub const ALL: [Self; 12] = [
        Self::Feat,
        Self::Revert,
        Self::Fix,
        Self::Chore,
        Self::Build,
        Self::Ci,
        Self::Perf,
        Self::Refactor,
        Self::Docs,
        Self::Style,
        Self::Test,
        Self::Ugly,
    ];

    /// Returns the keyword used in commit summaries and section headers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Revert => "revert",
            Self::Fix => "fix",
            Self::Chore => "chore",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Perf => "perf",
            Self::Refactor => "refactor",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Test => "test",
            Self::Ugly => "ugly",
        }
    }

    /// Returns the priority rank, 0 being the highest.
    #[must_use]
    pub const fn priority(self) -> u8 {
        self as u8
    }

    /// Returns true for every type except [`CommitType::Ugly`].
    #[must_use]
    pub const fn is_conforming(self) -> bool {
        !matches!(self, Self::Ugly)
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when a string is not a known commit type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown commit type: {0}")]
pub struct UnknownCommitType(pub String);

impl FromStr for CommitType {
    type Err = UnknownCommitType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownCommitType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_round_trips_through_from_str() {
        for kind in CommitType::ALL {
            assert_eq!(kind.as_str().parse::<CommitType>(), Ok(kind));
        }
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("Feat".parse::<CommitType>().is_err());
        assert!("FIX".parse::<CommitType>().is_err());
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "feature".parse::<CommitType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown commit type: feature");
    }

    #[test]
    fn test_priority_follows_declaration_order() {
        assert_eq!(CommitType::Feat.priority(), 0);
        assert_eq!(CommitType::Revert.priority(), 1);
        assert_eq!(CommitType::Fix.priority(), 2);
        assert_eq!(CommitType::Test.priority(), 10);
        assert_eq!(CommitType::Ugly.priority(), 11);
    }

    #[test]
    fn test_ugly_is_not_conforming() {
        assert!(!CommitType::Ugly.is_conforming());
        assert!(CommitType::Docs.is_conforming());
    }

    #[test]
    fn test_display() {
        assert_eq!(CommitType::Refactor.to_string(), "refactor");
        assert_eq!(format!("{:<6}|", CommitType::Ci), "ci    |");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&CommitType::Chore).unwrap();
        assert_eq!(json, "\"chore\"");
        let kind: CommitType = serde_json::from_str("\"ugly\"").unwrap();
        assert_eq!(kind, CommitType::Ugly);
    }
}
