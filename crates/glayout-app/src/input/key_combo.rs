use std::fmt;

use glayout_config::keybinds::{parse_keybind, KeyBind, KeybindError, Modifier};

pub(super) const MOD_CTRL: u8 = 0b0001;
pub(super) const MOD_ALT: u8 = 0b0010;
pub(super) const MOD_SHIFT: u8 = 0b0100;
pub(super) const MOD_SUPER: u8 = 0b1000;

const MOD_NAMES: [(u8, &str); 4] = [
    (MOD_CTRL, "Ctrl"),
    (MOD_ALT, "Alt"),
    (MOD_SHIFT, "Shift"),
    (MOD_SUPER, "Super"),
];

/// A canonical key representation for fast HashMap lookup.
///
/// Modifiers are stored as a bitmask so `Shift+Super+L` and `Super+Shift+L`
/// hash identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: Ctrl=1, Alt=2, Shift=4, Super=8.
    pub mods: u8,
    /// Normalized key name (e.g. "J", "Return", "F1").
    pub key: String,
}

impl KeyCombo {
    /// Build from a parsed [`KeyBind`].
    pub fn from_keybind(kb: &KeyBind) -> Self {
        let mut mods = 0u8;
        for m in &kb.modifiers {
            mods |= match m {
                Modifier::Ctrl => MOD_CTRL,
                Modifier::Alt => MOD_ALT,
                Modifier::Shift => MOD_SHIFT,
                Modifier::Super => MOD_SUPER,
            };
        }
        Self {
            mods,
            key: kb.key.clone(),
        }
    }

    /// Parse a human-readable combo such as `"super+shift+l"`.
    pub fn parse(s: &str) -> Result<Self, KeybindError> {
        parse_keybind(s).map(|kb| Self::from_keybind(&kb))
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (bit, name) in MOD_NAMES {
            if self.mods & bit != 0 {
                write!(f, "{name}+")?;
            }
        }
        f.write_str(&self.key)
    }
}
