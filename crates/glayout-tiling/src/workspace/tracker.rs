//! Window-set tracking: keeps the tileable list in sync with the host.

use std::collections::HashSet;

use glayout_common::types::WindowId;
use tracing::debug;

use crate::platform::Window;

use super::TilingWorkspace;

impl TilingWorkspace {
    /// Re-sync the tileable list with the host's current window list.
    ///
    /// Survivors keep their relative order, windows that stopped being
    /// tileable are dropped, and newly tileable windows are appended in host
    /// order. Each window's predicates are queried exactly once.
    pub fn update<W: Window>(&mut self, windows: &[W]) {
        let mut seen = HashSet::new();
        let filtered: Vec<WindowId> = windows
            .iter()
            .filter(|w| w.is_tileable())
            .map(|w| w.id())
            .filter(|id| seen.insert(*id))
            .collect();

        if filtered.is_empty() {
            self.tileable.clear();
            debug!(workspace = %self.id, "tileable windows: 0");
            return;
        }

        self.tileable.retain(|id| seen.contains(id));

        let tracked: HashSet<WindowId> = self.tileable.iter().copied().collect();
        self.tileable
            .extend(filtered.into_iter().filter(|id| !tracked.contains(id)));

        debug!(
            workspace = %self.id,
            count = self.tileable.len(),
            "tileable windows: {}",
            self.tileable.len()
        );
    }
}
