//! Configuration loader.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "recap.toml";

/// Loads and validates configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file is missing, cannot be read or parsed, or holds invalid
/// values.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content).map_err(|source| ConfigError::InvalidToml {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;

    Ok(config)
}

/// Looks for a configuration file in `start_dir`, then in each of its parents.
pub fn find_config_from(start_dir: impl AsRef<Path>) -> Option<PathBuf> {
    start_dir
        .as_ref()
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Loads the configuration found from `start_dir` upwards, or the defaults if there is none.
///
/// # Errors
///
/// Returns an error if a configuration file exists but cannot be loaded.
pub fn load_config_or_default(start_dir: impl AsRef<Path>) -> ConfigResult<Config> {
    match find_config_from(start_dir.as_ref()) {
        Some(path) => load_config(path),
        None => {
            debug!(start_dir = ?start_dir.as_ref(), "no configuration file, using defaults");
            Ok(Config::default())
        }
    }
}
