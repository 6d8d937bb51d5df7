//! Configuration I/O operations

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Name of the config file inside the project root
pub const CONFIG_FILE_NAME: &str = "mlt.toml";

/// Get the config file path (`<root>/mlt.toml`)
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Load configuration from file, or return defaults if not found
pub fn load(root: &Path) -> Result<Config> {
    let config_path = config_path(root);

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    } else {
        Ok(Config::default())
    }
}
