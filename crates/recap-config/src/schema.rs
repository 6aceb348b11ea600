//! Configuration schema.

use recap_commit::CommitType;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Changelog configuration.
    #[serde(default)]
    pub changelog: ChangelogConfig,
}

impl Config {
    /// Checks values the schema alone cannot rule out.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first offending value.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.changelog.max_commits == 0 {
            return Err(ConfigError::Invalid(
                "changelog.max_commits must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// How changelog sections are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Alphabetically by type name.
    #[default]
    Lexicographic,
    /// By declared type priority: `feat` first, `ugly` last.
    Priority,
}

/// Changelog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangelogConfig {
    /// Maximum number of commits read from history.
    #[serde(default = "default_max_commits")]
    pub max_commits: usize,

    /// Commit types always left out.
    #[serde(default)]
    pub exclude_types: Vec<CommitType>,

    /// Only keep commits from the last N days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,

    /// Section ordering.
    #[serde(default)]
    pub sort: SortOrder,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            max_commits: default_max_commits(),
            exclude_types: Vec::new(),
            days: None,
            sort: SortOrder::default(),
        }
    }
}

fn default_max_commits() -> usize {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.changelog.max_commits, 100);
        assert!(config.changelog.exclude_types.is_empty());
        assert_eq!(config.changelog.days, None);
        assert_eq!(config.changelog.sort, SortOrder::Lexicographic);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.changelog.max_commits, 100);
    }

    #[test]
    fn test_deserialize_full() {
        let toml = r#"
            [changelog]
            max_commits = 250
            exclude_types = ["chore", "ugly"]
            days = 14
            sort = "priority"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.changelog.max_commits, 250);
        assert_eq!(
            config.changelog.exclude_types,
            vec![CommitType::Chore, CommitType::Ugly]
        );
        assert_eq!(config.changelog.days, Some(14));
        assert_eq!(config.changelog.sort, SortOrder::Priority);
    }

    #[test]
    fn test_deserialize_unknown_type_fails() {
        let toml = r#"
            [changelog]
            exclude_types = ["feature"]
        "#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_deserialize_negative_days_fails() {
        let toml = r"
            [changelog]
            days = -3
        ";
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_deserialize_unknown_field_fails() {
        let toml = r"
            [changelog]
            output = 'CHANGELOG.md'
        ";
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_validate_zero_max_commits() {
        let mut config = Config::default();
        config.changelog.max_commits = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_serialize_config() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("[changelog]"));
        assert!(toml_str.contains("max_commits = 100"));
        assert!(toml_str.contains("sort = \"lexicographic\""));
        assert!(!toml_str.contains("days"));
    }
}
