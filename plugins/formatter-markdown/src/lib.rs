//! Markdown changelog formatter.

use std::fmt::Write;

use recap_commit::{CommitRecord, CommitType};
use recap_plugin::{ChangelogFormatter, Plugin};

/// Column width the scope is padded to in bullet lines.
pub const SCOPE_WIDTH: usize = 18;

/// Renders records as markdown, one `## type` section per contiguous run of a type.
///
/// Returns `None` for an empty slice. Records are expected to be sorted already; a type
/// that appears in two separate runs gets two sections.
#[must_use]
pub fn render(records: &[CommitRecord]) -> Option<String> {
    let first = records.first()?;

    let mut output = String::new();
    let mut section = first.commit_type();
    write_section(&mut output, section);

    for record in records {
        if record.commit_type() != section {
            section = record.commit_type();
            write_section(&mut output, section);
        }
        write_bullet(&mut output, record);
    }

    Some(output)
}

fn write_section(output: &mut String, commit_type: CommitType) {
    _ = writeln!(output, "\n## {commit_type}");
}

fn write_bullet(output: &mut String, record: &CommitRecord) {
    let scope = record.scope().unwrap_or_default();
    _ = writeln!(
        output,
        "* {scope:<width$} {} ",
        record.message(),
        width = SCOPE_WIDTH
    );
}

/// Markdown formatter.
///
/// Bullet lines are `* <scope padded to 18> <message> ` followed by a newline.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Creates a new formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for MarkdownFormatter {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Renders a markdown changelog grouped by commit type"
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    fn format(&self, records: &[CommitRecord]) -> Option<String> {
        render(records)
    }
}
