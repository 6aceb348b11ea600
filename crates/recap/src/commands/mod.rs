//! CLI commands.

pub mod changelog;
