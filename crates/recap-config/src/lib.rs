//! Configuration management for Recap.
//!
//! This crate handles loading and validating the optional `recap.toml` configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_config_from, load_config, load_config_or_default};
pub use schema::{ChangelogConfig, Config, SortOrder};
