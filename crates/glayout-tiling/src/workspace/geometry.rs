//! Applying computed geometry to host windows.

use std::collections::HashMap;

use glayout_common::events::Placement;
use glayout_common::types::{Rect, WindowId};
use tracing::debug;

use crate::platform::Window;

use super::TilingWorkspace;

impl TilingWorkspace {
    /// Pure layout for the tracked windows, master first.
    pub fn compute_layout(&self, work_area: Rect) -> Vec<(WindowId, Rect)> {
        self.layout.compute(&self.tileable, work_area)
    }

    /// Move and resize every tracked window, master first, then the stack
    /// top to bottom.
    ///
    /// `windows` supplies the host handles. A tracked window the host no
    /// longer lists is skipped; its slot is still reserved.
    pub fn relocate<W: Window>(&self, windows: &[W], work_area: Rect) -> Vec<Placement> {
        if self.tileable.is_empty() {
            return Vec::new();
        }

        let handles: HashMap<WindowId, &W> = windows.iter().map(|w| (w.id(), w)).collect();
        let mut applied = Vec::with_capacity(self.tileable.len());

        for (id, frame) in self.compute_layout(work_area) {
            let Some(window) = handles.get(&id) else {
                debug!(workspace = %self.id, window = %id, "tracked window not listed by host, skipping");
                continue;
            };
            debug!(workspace = %self.id, window = %id, %frame, "relocate");
            window.set_geometry(frame);
            applied.push(Placement { window: id, frame });
        }

        applied
    }
}
