//! Core types and constructors for TilingWorkspace.

use glayout_common::events::Placement;
use glayout_common::types::{WindowId, WorkspaceId};
use serde::{Deserialize, Serialize};

use crate::layout::MasterStackLayout;

/// Construction parameters shared by every workspace in a registry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TilingSettings {
    pub master_width_fraction: f64,
    pub vertical_offset: u32,
    /// Change applied by one grow/shrink step.
    pub fraction_step: f64,
}

impl Default for TilingSettings {
    fn default() -> Self {
        Self {
            master_width_fraction: 0.5,
            vertical_offset: 80,
            fraction_step: 0.1,
        }
    }
}

/// What a command did to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Preconditions were not met; nothing was sent to the host.
    Unchanged,
    /// Focus and activation were requested for this window.
    Focused(WindowId),
    /// Geometry was requested for these windows, in request order.
    Relocated(Vec<Placement>),
}

/// Tiling state for one host workspace.
///
/// `tileable` is a cache of the windows that passed the tileability check
/// during the last [`update`](TilingWorkspace::update). Index 0 is the master;
/// the rest form the stack from top to bottom.
#[derive(Debug, Clone)]
pub struct TilingWorkspace {
    pub(super) id: WorkspaceId,
    pub(super) tileable: Vec<WindowId>,
    pub(super) layout: MasterStackLayout,
    pub(super) fraction_step: f64,
}

impl TilingWorkspace {
    pub fn new(id: WorkspaceId) -> Self {
        Self::with_settings(id, TilingSettings::default())
    }

    pub fn with_settings(id: WorkspaceId, settings: TilingSettings) -> Self {
        Self {
            id,
            tileable: Vec::new(),
            layout: MasterStackLayout::new(
                settings.master_width_fraction,
                settings.vertical_offset,
            ),
            fraction_step: settings.fraction_step,
        }
    }

    // -- Accessors --

    pub fn id(&self) -> WorkspaceId {
        self.id
    }

    /// Tracked windows, master first.
    pub fn tileable_windows(&self) -> &[WindowId] {
        &self.tileable
    }

    pub fn master(&self) -> Option<WindowId> {
        self.tileable.first().copied()
    }

    pub fn stack(&self) -> &[WindowId] {
        self.tileable.get(1..).unwrap_or(&[])
    }

    pub fn master_width_fraction(&self) -> f64 {
        self.layout.master_width_fraction()
    }

    pub fn vertical_offset(&self) -> u32 {
        self.layout.vertical_offset
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.tileable.contains(&id)
    }
}
