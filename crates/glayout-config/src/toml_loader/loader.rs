//! Reading and parsing config files.

use std::fs;
use std::path::Path;

use glayout_common::ConfigError;
use tracing::{debug, info, warn};

use crate::schema::GlayoutConfig;
use crate::validation;

use super::paths::{create_default_config, default_config_path};

/// Parse the TOML file at `path`. Missing fields take their defaults.
///
/// This is the lenient loader: validation problems are logged, and the
/// parsed values are returned untouched. [`crate::load_config_from`] is the
/// strict counterpart.
pub fn load_from_path(path: &Path) -> Result<GlayoutConfig, ConfigError> {
    let config = read_config(path)?;
    warn_if_invalid(&config, path);
    Ok(config)
}

/// Load from [`default_config_path`], writing the default file first if
/// there is none yet. Lenient like [`load_from_path`].
pub fn load_default() -> Result<GlayoutConfig, ConfigError> {
    let (config, path) = read_default()?;
    warn_if_invalid(&config, &path);
    Ok(config)
}

/// Read and deserialize without validating.
pub(crate) fn read_config(path: &Path) -> Result<GlayoutConfig, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;
    let config: GlayoutConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    debug!(
        path = %path.display(),
        fraction = config.tiling.master_width_fraction,
        offset = config.tiling.vertical_offset,
        "parsed config"
    );
    Ok(config)
}

/// [`read_config`] on the default path, creating the file on first run.
pub(crate) fn read_default() -> Result<(GlayoutConfig, std::path::PathBuf), ConfigError> {
    let path = default_config_path()?;
    if path.exists() {
        return Ok((read_config(&path)?, path));
    }

    info!(path = %path.display(), "no config file, creating one");
    create_default_config(&path)?;
    Ok((GlayoutConfig::default(), path))
}

fn warn_if_invalid(config: &GlayoutConfig, path: &Path) {
    if let Err(e) = validation::validate(config) {
        warn!(path = %path.display(), "config has invalid values: {e}");
    }
}
