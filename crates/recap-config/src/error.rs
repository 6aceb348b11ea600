//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Invalid TOML syntax or schema.
    #[error("invalid TOML in {}: {source}", .path.display())]
    InvalidToml {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying parse error.
        source: toml::de::Error,
    },

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
