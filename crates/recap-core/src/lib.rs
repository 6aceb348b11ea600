//! Core library for Recap.
//!
//! This crate turns the commits of a repository into a markdown changelog: records are
//! classified by a [`recap_plugin::CommitParser`], filtered, sorted, and handed to a
//! [`recap_plugin::ChangelogFormatter`].

mod error;
mod filter;
mod pipeline;
mod sort;

pub use error::{CoreError, CoreResult};
pub use filter::{exclude_older_than, exclude_older_than_at, exclude_types};
pub use pipeline::{ChangelogOptions, Pipeline};
pub use sort::{sort, sort_by_order};
