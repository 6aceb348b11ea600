//! Raw commit type as retrieved from Git.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A commit as retrieved from Git, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommit {
    /// The commit hash (SHA).
    pub hash: String,

    /// The full commit message (summary + body).
    pub message: String,

    /// The commit author name.
    pub author: String,

    /// The commit author email.
    pub email: String,

    /// The commit time, in the committer's timezone.
    pub date: DateTime<FixedOffset>,
}

impl RawCommit {
    /// Creates a new raw commit.
    #[must_use]
    pub fn new(
        hash: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
        email: impl Into<String>,
        date: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            hash: hash.into(),
            message: message.into(),
            author: author.into(),
            email: email.into(),
            date,
        }
    }

    /// Returns the first line of the commit message (the summary).
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Returns the short hash (first 7 characters).
    #[must_use]
    pub fn short_hash(&self) -> &str {
        &self.hash[..7.min(self.hash.len())]
    }
}
