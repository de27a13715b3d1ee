//! Configuration schema types for glayout.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod keybind_config;
mod system;
mod tiling;

pub use keybind_config::*;
pub use system::*;
pub use tiling::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for glayout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct GlayoutConfig {
    pub tiling: TilingConfig,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}
