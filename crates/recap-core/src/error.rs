//! Core error types.

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Git error.
    #[error("git error: {0}")]
    Git(#[from] recap_git::GitError),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
