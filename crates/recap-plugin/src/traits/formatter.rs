//! Changelog formatter trait.

use recap_commit::CommitRecord;

use super::Plugin;

/// Renders changelog output.
pub trait ChangelogFormatter: Plugin {
    /// Renders records, already filtered and sorted, into a document.
    ///
    /// Returns `None` when there is nothing to render.
    fn format(&self, records: &[CommitRecord]) -> Option<String>;

    /// Returns the file extension for the output (e.g., "md").
    fn extension(&self) -> &'static str {
        "md"
    }
}
