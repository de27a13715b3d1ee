//! Full configuration validation.
//!
//! Validates numeric ranges and keybinds. Each section has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod helpers;
mod keybinds;
mod tiling;


use crate::schema::GlayoutConfig;
use glayout_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GlayoutConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    tiling::validate_tiling(&mut errors, config);
    keybinds::validate_keybinds(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
