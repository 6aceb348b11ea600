//! Git error types.

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Path does not exist.
    #[error("path {} does not exist", .0.display())]
    RepoNotFound(std::path::PathBuf),

    /// Not a git repository.
    #[error("path {} is not a valid git repository", .0.display())]
    NotARepo(std::path::PathBuf),

    /// No commits found.
    #[error("no commits found")]
    NoCommits,

    /// Commit time outside the representable range.
    #[error("invalid commit time for {0}")]
    InvalidTime(String),

    /// Git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
