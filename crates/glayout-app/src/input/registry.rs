use std::collections::HashMap;

use glayout_common::{Action, HostError};
use glayout_config::keybinds::{all_keybinds, parse_keybind};
use glayout_config::schema::KeybindConfig;

use super::key_combo::KeyCombo;

/// Maps key combinations to [`Action`]s.
///
/// Built once from [`KeybindConfig`] at startup.
#[derive(Debug, Default)]
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Build the registry from the config keybind section.
    ///
    /// Fails on the first binding that does not parse.
    pub fn from_config(config: &KeybindConfig) -> Result<Self, HostError> {
        let mut bindings = HashMap::new();

        for (name, binding) in all_keybinds(config) {
            let Some(action) = Action::from_name(name) else {
                continue;
            };
            let kb = parse_keybind(binding).map_err(|e| HostError::InvalidKeybind {
                binding: binding.to_string(),
                reason: e.to_string(),
            })?;
            let combo = KeyCombo::from_keybind(&kb);
            tracing::debug!(%combo, action = action.binding_name(), "bound key");
            bindings.insert(combo, action);
        }

        Ok(Self { bindings })
    }

    /// Look up an action for a key combination.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<Action> {
        self.bindings.get(combo).copied()
    }

    /// Display string of the combo bound to `action`, if any.
    pub fn keybind_for_action(&self, action: Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| **a == action)
            .map(|(combo, _)| combo.to_string())
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
