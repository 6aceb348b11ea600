//! Changelog command.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::info;

use recap_commit::CommitType;
use recap_config::{Config, load_config, load_config_or_default};
use recap_core::{ChangelogOptions, Pipeline};
use recap_formatter_markdown::MarkdownFormatter;
use recap_git::Repository;
use recap_parser_conventional::ConventionalParser;

/// Arguments for the changelog command.
#[derive(Debug, Args)]
pub struct ChangelogArgs {
    /// Directory of the repository
    pub repository: PathBuf,

    /// Exclude a commit type from the changelog (repeatable)
    #[arg(long = "exclude-type", value_name = "TYPE")]
    pub exclude_types: Vec<CommitType>,

    /// Only include commits from the last DAYS days
    #[arg(long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Configuration file (default: recap.toml in the repository or a parent directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Checks the day count and narrows it to the range the filter accepts.
fn validate_days(days: i64) -> Result<u32> {
    if days < 0 {
        bail!("--days must be positive, got {days}");
    }
    u32::try_from(days).with_context(|| format!("--days {days} is too large"))
}

fn load(args: &ChangelogArgs, repo: &Repository) -> Result<Config> {
    match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => load_config_or_default(repo.path()).context("failed to load configuration"),
    }
}

/// Builds the pipeline options: configuration first, command-line flags on top.
fn options(config: &Config, args: &ChangelogArgs) -> Result<ChangelogOptions> {
    let mut options = ChangelogOptions::from(&config.changelog)
        .with_excluded_types(args.exclude_types.iter().copied());
    if let Some(days) = args.days {
        options = options.with_days(validate_days(days)?);
    }
    Ok(options)
}

/// Runs the changelog command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ChangelogArgs) -> Result<()> {
    // Cheap argument checks before touching the repository
    if let Some(days) = args.days {
        validate_days(days)?;
    }

    let repo = Repository::open(&args.repository).context("failed to open git repository")?;
    info!(path = %repo.path().display(), "opened repository");

    let config = load(&args, &repo)?;
    let options = options(&config, &args)?;
    info!(?options, "changelog options");

    let pipeline = Pipeline::new(
        Box::new(ConventionalParser::new()),
        Box::new(MarkdownFormatter::new()),
    );

    match pipeline
        .generate(&repo, &options)
        .context("failed to generate changelog")?
    {
        Some(changelog) => println!("{changelog}"),
        None => info!("no commits left to report"),
    }

    Ok(())
}
