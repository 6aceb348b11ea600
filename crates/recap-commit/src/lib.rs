//! Commit types for Recap.
//!
//! This crate provides the commit types shared by every stage of the changelog pipeline:
//! - [`RawCommit`]: A commit as retrieved from Git
//! - [`CommitType`]: The Conventional Commits type vocabulary, plus the `ugly` fallback
//! - [`CommitRecord`]: A classified commit, as filtered, sorted and rendered

mod kind;
mod raw;
mod record;

pub use kind::{CommitType, UnknownCommitType};
pub use raw::RawCommit;
pub use record::{Classification, CommitRecord};
