//! Conventional Commits classifier.
//!
//! Summaries of the form `type(scope): message` are split into their parts. Anything else
//! is kept whole under the `ugly` type.

use regex::Regex;
use std::sync::LazyLock;

use recap_commit::{Classification, CommitRecord, CommitType, RawCommit};
use recap_plugin::{CommitParser, Plugin};

static CONVENTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>build|chore|ci|docs|feat|fix|perf|refactor|revert|style|test)(?:\((?P<scope>[*.\-\w]*)\))?: (?P<message>.*)",
    )
    .expect("invalid regex")
});

/// Classifies a single-line commit summary.
///
/// The message runs to the end of the first line and keeps its whitespace. Summaries that
/// don't match come back as [`CommitType::Ugly`] with the summary untouched.
#[must_use]
pub fn classify(summary: &str) -> Classification {
    let Some(captures) = CONVENTIONAL_RE.captures(summary) else {
        return Classification::ugly(summary);
    };

    let r#type = captures
        .name("type")
        .and_then(|m| m.as_str().parse::<CommitType>().ok());
    let message = captures.name("message").map(|m| m.as_str());

    match (r#type, message) {
        (Some(r#type), Some(message)) => {
            let scope = captures.name("scope").map(|m| m.as_str().to_string());
            Classification::new(r#type, scope, message)
        }
        _ => Classification::ugly(summary),
    }
}

/// Conventional Commits parser.
pub struct ConventionalParser;

impl ConventionalParser {
    /// Creates a new conventional parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConventionalParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for ConventionalParser {
    fn name(&self) -> &'static str {
        "conventional"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Classifies Conventional Commits summaries"
    }
}

impl CommitParser for ConventionalParser {
    fn parse(&self, raw: &RawCommit) -> CommitRecord {
        CommitRecord::new(classify(raw.subject()), raw.date)
    }
}
