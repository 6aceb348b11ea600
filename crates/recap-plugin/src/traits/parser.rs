//! Commit parser trait.

use recap_commit::{CommitRecord, RawCommit};

use super::Plugin;

/// Classifies raw commits into structured records.
pub trait CommitParser: Plugin {
    /// Classifies a raw commit.
    ///
    /// Never fails: a commit that doesn't match the expected format is still returned,
    /// under the parser's fallback type.
    fn parse(&self, raw: &RawCommit) -> CommitRecord;

    /// Returns whether the commit follows the format this parser understands.
    ///
    /// Default implementation parses and checks the resulting type.
    fn is_conforming(&self, raw: &RawCommit) -> bool {
        self.parse(raw).commit_type().is_conforming()
    }
}
