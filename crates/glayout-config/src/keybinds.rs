//! Keybind parsing and validation utilities.

use crate::schema::KeybindConfig;
use glayout_common::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A keyboard modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    /// Super/Win/Meta/Cmd.
    Super,
}

/// A key binding consisting of zero or more modifiers and a key name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBind {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeybindError {
    #[error("empty keybind string")]
    Empty,

    #[error("unrecognized modifier: {0}")]
    UnknownModifier(String),

    #[error("keybind has no key component")]
    MissingKey,
}

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("focus_up", &config.focus_up),
        ("focus_down", &config.focus_down),
        ("switch_master", &config.switch_master),
        ("increase_mw_fact", &config.increase_mw_fact),
        ("decrease_mw_fact", &config.decrease_mw_fact),
    ]
}

/// Validate that no two keybinds are mapped to the same key combination.
///
/// Bindings are compared after parsing, so `"super+j"` and `"Super+J"`
/// collide. Unparsable bindings are compared verbatim.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let binds = all_keybinds(config);
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (name, binding) in &binds {
        let canonical = match parse_keybind(binding) {
            Ok(kb) => canonical_form(&kb),
            Err(_) => binding.to_string(),
        };
        if let Some(existing_name) = seen.get(&canonical) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(canonical, name);
    }

    Ok(())
}

/// Parses a human-readable keybind string like `"Super+J"` or
/// `"Ctrl+Shift+Return"` into a [`KeyBind`].
///
/// Modifier aliases:
/// - `"Control"` / `"Ctrl"` -> `Ctrl`
/// - `"Alt"` / `"Option"` -> `Alt`
/// - `"Super"` / `"Win"` / `"Meta"` / `"Cmd"` / `"Logo"` -> `Super`
/// - `"Shift"` -> `Shift`
///
/// The last token is always the key, even when it spells a modifier.
pub fn parse_keybind(s: &str) -> Result<KeyBind, KeybindError> {
    let tokens: Vec<&str> = s.split('+').map(|t| t.trim()).collect();

    if tokens.len() == 1 && tokens[0].is_empty() {
        return Err(KeybindError::Empty);
    }

    let (key_token, modifier_tokens) = tokens.split_last().ok_or(KeybindError::Empty)?;

    let mut modifiers = Vec::new();
    for token in modifier_tokens {
        let modifier =
            normalize_modifier(token).ok_or_else(|| KeybindError::UnknownModifier(token.to_string()))?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    if key_token.is_empty() {
        return Err(KeybindError::MissingKey);
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(key_token),
    })
}

fn canonical_form(kb: &KeyBind) -> String {
    let mut mods: Vec<&str> = kb
        .modifiers
        .iter()
        .map(|m| match m {
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::Super => "Super",
        })
        .collect();
    mods.sort_unstable();
    mods.push(&kb.key);
    mods.join("+")
}

fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "super" | "win" | "meta" | "cmd" | "command" | "logo" => Some(Modifier::Super),
        _ => None,
    }
}

fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "enter" | "return" => "Return".into(),
        "escape" | "esc" => "Escape".into(),
        "space" => "Space".into(),
        "tab" => "Tab".into(),
        "up" => "Up".into(),
        "down" => "Down".into(),
        "left" => "Left".into(),
        "right" => "Right".into(),
        "period" => ".".into(),
        "comma" => ",".into(),
        _ => {
            if token.chars().count() == 1 {
                token.to_uppercase()
            } else {
                let mut chars = lower.chars();
                match chars.next() {
                    Some(c) => {
                        let upper: String = c.to_uppercase().collect();
                        format!("{upper}{}", chars.as_str())
                    }
                    None => lower,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keybinds_have_no_duplicates() {
        let config = KeybindConfig::default();
        assert!(validate_no_duplicates(&config).is_ok());
    }

    #[test]
    fn all_keybinds_returns_5_entries() {
        let config = KeybindConfig::default();
        assert_eq!(all_keybinds(&config).len(), 5);
    }

    #[test]
    fn detects_duplicate_keybinds() {
        let config = KeybindConfig {
            focus_up: "Super+J".into(),
            focus_down: "Super+J".into(),
            ..Default::default()
        };
        let err = validate_no_duplicates(&config).unwrap_err().to_string();
        assert!(err.contains("duplicate keybind"));
        assert!(err.contains("Super+J"));
    }

    #[test]
    fn detects_duplicates_differing_only_in_spelling() {
        let config = KeybindConfig {
            increase_mw_fact: "shift+super+l".into(),
            decrease_mw_fact: "Super+Shift+L".into(),
            ..Default::default()
        };
        assert!(validate_no_duplicates(&config).is_err());
    }

    #[test]
    fn parse_simple_keybind() {
        let kb = parse_keybind("Super+J").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Super]);
        assert_eq!(kb.key, "J");
    }

    #[test]
    fn parse_multi_modifier_keybind() {
        let kb = parse_keybind("Ctrl+Shift+return").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl, Modifier::Shift]);
        assert_eq!(kb.key, "Return");
    }

    #[test]
    fn parse_aliases() {
        assert_eq!(parse_keybind("Win+h").unwrap().modifiers, vec![Modifier::Super]);
        assert_eq!(parse_keybind("Option+Up").unwrap().modifiers, vec![Modifier::Alt]);
        assert_eq!(parse_keybind("Option+Up").unwrap().key, "Up");
    }

    #[test]
    fn parse_bare_key() {
        let kb = parse_keybind("F5").unwrap();
        assert!(kb.modifiers.is_empty());
        assert_eq!(kb.key, "F5");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_keybind(""), Err(KeybindError::Empty));
        assert_eq!(parse_keybind("Super+"), Err(KeybindError::MissingKey));
        assert_eq!(
            parse_keybind("Hyper+J"),
            Err(KeybindError::UnknownModifier("Hyper".into()))
        );
    }
}
