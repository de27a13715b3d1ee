//! Host-facing entry points wired to the tiling engine.
//!
//! The controller is what a host adapter calls from its signal handlers:
//! window added or removed, workspace removed, and bound key pressed. Each
//! entry point resolves the workspace's tiling state through the registry,
//! runs the engine, and reports what changed on the event bus.

mod dispatch;
mod lifecycle;


use glayout_common::{Event, EventBus, GlayoutError, WorkspaceId};
use glayout_config::schema::TilingConfig;
use glayout_config::GlayoutConfig;
use glayout_tiling::{TilingSettings, TilingWorkspace, WorkspaceRegistry};

use crate::input::KeybindRegistry;

pub struct TilingController {
    registry: WorkspaceRegistry,
    keybinds: KeybindRegistry,
    events: Option<EventBus>,
}

impl TilingController {
    pub fn new(settings: TilingSettings, keybinds: KeybindRegistry) -> Self {
        Self {
            registry: WorkspaceRegistry::with_settings(settings),
            keybinds,
            events: None,
        }
    }

    /// Build from a loaded config. Any keybind that does not parse aborts
    /// initialization with [`HostError::InvalidKeybind`](glayout_common::HostError).
    pub fn from_config(config: &GlayoutConfig) -> Result<Self, GlayoutError> {
        let keybinds = KeybindRegistry::from_config(&config.keybinds)?;
        tracing::info!(bindings = keybinds.len(), "keybind registry loaded");
        Ok(Self::new(settings_from(&config.tiling), keybinds))
    }

    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.events = Some(bus);
        self
    }

    pub fn events(&self) -> Option<&EventBus> {
        self.events.as_ref()
    }

    pub fn keybinds(&self) -> &KeybindRegistry {
        &self.keybinds
    }

    pub fn registry(&self) -> &WorkspaceRegistry {
        &self.registry
    }

    pub fn workspace(&self, id: WorkspaceId) -> Option<&TilingWorkspace> {
        self.registry.get(id)
    }

    fn publish(&self, event: Event) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }
}

fn settings_from(config: &TilingConfig) -> TilingSettings {
    TilingSettings {
        master_width_fraction: config.master_width_fraction,
        vertical_offset: config.vertical_offset,
        fraction_step: config.fraction_step,
    }
}
