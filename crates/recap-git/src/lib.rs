//! Git access layer for Recap.
//!
//! This crate reads the recent history of a repository as [`recap_commit::RawCommit`]s.

mod error;
mod repository;

pub use error::{GitError, GitResult};
pub use repository::Repository;
