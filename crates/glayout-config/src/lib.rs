//! glayout configuration system.
//!
//! Provides TOML-based configuration for the tiling engine and its
//! keybindings. All sections use defaults so partial configs work out of
//! the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use glayout_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{GlayoutConfig, CONFIG_SCHEMA_VERSION};

use glayout_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it strictly.
///
/// Creates a default config file if none exists. Unlike
/// [`toml_loader::load_from_path`], validation failures are returned.
pub fn load_config() -> Result<GlayoutConfig, ConfigError> {
    let (config, _) = toml_loader::read_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it strictly.
pub fn load_config_from(path: &Path) -> Result<GlayoutConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::read_config(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GlayoutConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
