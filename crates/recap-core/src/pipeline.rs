//! Changelog pipeline execution.

use std::collections::HashSet;

use recap_commit::{CommitRecord, CommitType, RawCommit};
use recap_config::{ChangelogConfig, SortOrder};
use recap_git::Repository;
use recap_plugin::{ChangelogFormatter, CommitParser};
use tracing::{debug, info};

use crate::{CoreResult, exclude_older_than, exclude_types, sort_by_order};

/// What ends up in the changelog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogOptions {
    /// Maximum number of commits read from history.
    pub max_commits: usize,

    /// Commit types left out of the changelog.
    pub exclude_types: HashSet<CommitType>,

    /// Only keep commits from the last N days.
    pub days: Option<u32>,

    /// Section ordering.
    pub sort_order: SortOrder,
}

impl Default for ChangelogOptions {
    fn default() -> Self {
        Self::from(&ChangelogConfig::default())
    }
}

impl From<&ChangelogConfig> for ChangelogOptions {
    fn from(config: &ChangelogConfig) -> Self {
        Self {
            max_commits: config.max_commits,
            exclude_types: config.exclude_types.iter().copied().collect(),
            days: config.days,
            sort_order: config.sort,
        }
    }
}

impl ChangelogOptions {
    /// Adds types to exclude, on top of those already set.
    #[must_use]
    pub fn with_excluded_types(mut self, types: impl IntoIterator<Item = CommitType>) -> Self {
        self.exclude_types.extend(types);
        self
    }

    /// Sets the age limit, replacing any previous one.
    #[must_use]
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = Some(days);
        self
    }
}

/// Orchestrates classification, filtering, sorting and rendering.
pub struct Pipeline {
    parser: Box<dyn CommitParser>,
    formatter: Box<dyn ChangelogFormatter>,
}

impl Pipeline {
    /// Creates a new pipeline with the given plugins.
    #[must_use]
    pub fn new(parser: Box<dyn CommitParser>, formatter: Box<dyn ChangelogFormatter>) -> Self {
        Self { parser, formatter }
    }

    /// Classifies raw commits using the configured parser, keeping their order.
    pub fn classify(&self, raw_commits: &[RawCommit]) -> Vec<CommitRecord> {
        raw_commits
            .iter()
            .map(|raw| {
                let record = self.parser.parse(raw);
                if !record.commit_type().is_conforming() {
                    debug!(
                        hash = %raw.short_hash(),
                        subject = %raw.subject(),
                        "non-conforming commit"
                    );
                }
                record
            })
            .collect()
    }

    /// Filters and sorts records according to the options.
    pub fn select(&self, mut records: Vec<CommitRecord>, options: &ChangelogOptions) -> Vec<CommitRecord> {
        exclude_types(&mut records, &options.exclude_types);

        if let Some(days) = options.days {
            // Age is measured in the timezone of the most recent remaining commit.
            if let Some(tz) = records.first().map(|r| *r.timestamp().offset()) {
                exclude_older_than(&mut records, days, &tz);
            }
        }

        sort_by_order(&mut records, options.sort_order);
        records
    }

    /// Runs the whole pipeline over already collected commits.
    ///
    /// Returns `None` when no commit survives filtering.
    pub fn run(&self, raw_commits: &[RawCommit], options: &ChangelogOptions) -> Option<String> {
        let records = self.select(self.classify(raw_commits), options);
        info!(
            count = records.len(),
            formatter = self.formatter.name(),
            "rendering changelog"
        );
        self.formatter.format(&records)
    }

    /// Reads the most recent commits of `repo` and runs the pipeline over them.
    ///
    /// # Errors
    ///
    /// Returns an error if the commits cannot be read.
    pub fn generate(
        &self,
        repo: &Repository,
        options: &ChangelogOptions,
    ) -> CoreResult<Option<String>> {
        let raw_commits = repo.recent_commits(options.max_commits)?;
        info!(
            count = raw_commits.len(),
            parser = self.parser.name(),
            "collected commits"
        );
        Ok(self.run(&raw_commits, options))
    }

    /// Returns a reference to the parser.
    pub fn parser(&self) -> &dyn CommitParser {
        self.parser.as_ref()
    }

    /// Returns a reference to the formatter.
    pub fn formatter(&self) -> &dyn ChangelogFormatter {
        self.formatter.as_ref()
    }
}
