//! Keyboard input: canonical key combinations and the action lookup table.

mod key_combo;
mod registry;

pub use key_combo::KeyCombo;
pub use registry::KeybindRegistry;
