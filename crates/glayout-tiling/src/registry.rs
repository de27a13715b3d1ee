//! Workspace id to tiling state, owned by whoever dispatches host events.

use std::collections::HashMap;

use glayout_common::types::WorkspaceId;
use tracing::{debug, info};

use crate::workspace::{TilingSettings, TilingWorkspace};

/// Lazily populated store of [`TilingWorkspace`]s.
///
/// Entries are created on first access and live until the host reports the
/// workspace gone through [`remove`](WorkspaceRegistry::remove).
#[derive(Debug, Default)]
pub struct WorkspaceRegistry {
    settings: TilingSettings,
    entries: HashMap<WorkspaceId, TilingWorkspace>,
}

impl WorkspaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// New workspaces start from `settings`.
    pub fn with_settings(settings: TilingSettings) -> Self {
        Self {
            settings,
            entries: HashMap::new(),
        }
    }

    pub fn settings(&self) -> &TilingSettings {
        &self.settings
    }

    pub fn get_or_create(&mut self, id: WorkspaceId) -> &mut TilingWorkspace {
        let settings = self.settings;
        self.entries.entry(id).or_insert_with(|| {
            debug!(workspace = %id, "creating tiling workspace");
            TilingWorkspace::with_settings(id, settings)
        })
    }

    pub fn get(&self, id: WorkspaceId) -> Option<&TilingWorkspace> {
        self.entries.get(&id)
    }

    /// Drop a workspace's state. Returns it if it existed.
    pub fn remove(&mut self, id: WorkspaceId) -> Option<TilingWorkspace> {
        let removed = self.entries.remove(&id);
        if removed.is_some() {
            info!(workspace = %id, "pruned tiling workspace");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Known workspace ids in ascending order.
    pub fn ids(&self) -> Vec<WorkspaceId> {
        let mut ids: Vec<_> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::memory::MemoryWorkspace;
    use crate::platform::Workspace;
    use glayout_common::types::{Rect, WindowId};

    #[test]
    fn get_or_create_is_lazy() {
        let mut registry = WorkspaceRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get(WorkspaceId(0)).is_none());

        registry.get_or_create(WorkspaceId(0));
        assert_eq!(registry.len(), 1);
        assert!(registry.get(WorkspaceId(0)).is_some());
    }

    #[test]
    fn get_or_create_returns_same_entry() {
        let host = MemoryWorkspace::new(WorkspaceId(1), Rect::new(0, 0, 800, 600));
        host.add_window(WindowId(7));

        let mut registry = WorkspaceRegistry::new();
        registry.get_or_create(WorkspaceId(1)).update(&host.list_windows());
        let again = registry.get_or_create(WorkspaceId(1));
        assert_eq!(again.tileable_windows(), &[WindowId(7)]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn new_entries_default_to_half_width() {
        let mut registry = WorkspaceRegistry::new();
        let tws = registry.get_or_create(WorkspaceId(2));
        assert!((tws.master_width_fraction() - 0.5).abs() < 1e-9);
        assert_eq!(tws.id(), WorkspaceId(2));
    }

    #[test]
    fn new_entries_use_registry_settings() {
        let mut registry = WorkspaceRegistry::with_settings(TilingSettings {
            master_width_fraction: 0.7,
            vertical_offset: 24,
            fraction_step: 0.05,
        });
        let tws = registry.get_or_create(WorkspaceId(0));
        assert!((tws.master_width_fraction() - 0.7).abs() < 1e-9);
        assert_eq!(tws.vertical_offset(), 24);
    }

    #[test]
    fn remove_prunes_entry() {
        let mut registry = WorkspaceRegistry::new();
        registry.get_or_create(WorkspaceId(0));
        registry.get_or_create(WorkspaceId(1));
        assert!(registry.remove(WorkspaceId(0)).is_some());
        assert!(registry.remove(WorkspaceId(0)).is_none());
        assert_eq!(registry.ids(), vec![WorkspaceId(1)]);
    }

    #[test]
    fn ids_are_sorted() {
        let mut registry = WorkspaceRegistry::new();
        for id in [3, 0, 2] {
            registry.get_or_create(WorkspaceId(id));
        }
        assert_eq!(
            registry.ids(),
            vec![WorkspaceId(0), WorkspaceId(2), WorkspaceId(3)]
        );
    }
}
