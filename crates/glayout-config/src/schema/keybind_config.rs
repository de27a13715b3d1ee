//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts for the five tiling actions.
///
/// Format: "Modifier+Key" where Modifier is one of: Super, Ctrl, Alt, Shift.
/// Multiple modifiers: "Super+Shift+J".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub focus_up: String,
    pub focus_down: String,
    pub switch_master: String,
    pub increase_mw_fact: String,
    pub decrease_mw_fact: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            focus_up: "Super+K".into(),
            focus_down: "Super+J".into(),
            switch_master: "Super+Return".into(),
            increase_mw_fact: "Super+L".into(),
            decrease_mw_fact: "Super+H".into(),
        }
    }
}
