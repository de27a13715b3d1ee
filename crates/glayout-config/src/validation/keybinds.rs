//! Keybind validation: every binding parses and none collide.

use crate::keybinds::{all_keybinds, parse_keybind, validate_no_duplicates};
use crate::schema::GlayoutConfig;

pub(crate) fn validate_keybinds(errors: &mut Vec<String>, config: &GlayoutConfig) {
    for (name, binding) in all_keybinds(&config.keybinds) {
        if let Err(e) = parse_keybind(binding) {
            errors.push(format!("keybinds.{name} = '{binding}': {e}"));
        }
    }

    if let Err(e) = validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }
}
