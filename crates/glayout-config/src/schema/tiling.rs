//! Master/stack tiling parameters.

use serde::{Deserialize, Serialize};

/// Tiling engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TilingConfig {
    /// Initial share of the work-area width given to the master column
    /// (valid range: 0.1-0.9).
    pub master_width_fraction: f64,
    /// Pixels reserved above the tiled area for a panel or bar
    /// (valid range: 0-400).
    pub vertical_offset: u32,
    /// Amount added or removed per grow/shrink keypress (valid range: 0.01-0.8).
    pub fraction_step: f64,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            master_width_fraction: 0.5,
            vertical_offset: 80,
            fraction_step: 0.1,
        }
    }
}
