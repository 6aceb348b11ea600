//! Plugin traits for Recap.
//!
//! This crate provides the seams of the changelog pipeline:
//! - [`Plugin`]: Base trait for all plugins
//! - [`CommitParser`]: Classifies raw commits into records
//! - [`ChangelogFormatter`]: Renders the final ordered records

mod traits;

pub use traits::Plugin;
pub use traits::formatter::ChangelogFormatter;
pub use traits::parser::CommitParser;
