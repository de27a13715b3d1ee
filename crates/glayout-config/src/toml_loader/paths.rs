//! Where the config file lives.

use std::fs;
use std::path::{Path, PathBuf};

use glayout_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// Environment variable that replaces the platform default path.
pub const CONFIG_PATH_ENV: &str = "GLAYOUT_CONFIG";

const APP_DIR: &str = "glayout";
const FILE_NAME: &str = "config.toml";

/// `$GLAYOUT_CONFIG` if set, else `<config dir>/glayout/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => config_path_under(dirs::config_dir()),
    }
}

pub(super) fn config_path_under(base: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    base.map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented default config to `path`, creating parent
/// directories as needed.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |what: &str, target: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {what} {}: {e}", target.display()))
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_err("create", parent, e))?;
    }
    fs::write(path, default_config_toml()).map_err(|e| io_err("write", path, e))?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
