//! Master promotion and master-width adjustment.

use std::collections::HashSet;

use glayout_common::events::Placement;
use glayout_common::types::{Rect, WindowId};
use tracing::debug;

use crate::platform::Window;

use super::TilingWorkspace;

impl TilingWorkspace {
    /// Swap the focused tileable window into the master slot.
    ///
    /// If the master itself is focused it trades places with the top of the
    /// stack. Membership is left alone; only order and geometry change.
    /// Returns `None` when no tileable window is focused or there is no
    /// stack to swap with.
    pub fn swap_master<W: Window>(
        &mut self,
        windows: &[W],
        work_area: Rect,
    ) -> Option<Vec<Placement>> {
        let focused: HashSet<WindowId> = windows
            .iter()
            .filter(|w| w.has_focus())
            .map(|w| w.id())
            .collect();
        let focused = self.tileable.iter().position(|id| focused.contains(id))?;

        match focused {
            0 if self.tileable.len() > 1 => self.tileable.swap(0, 1),
            0 => return None,
            i => self.tileable.swap(0, i),
        }
        debug!(workspace = %self.id, master = ?self.master(), "master swapped");

        Some(self.relocate(windows, work_area))
    }

    pub fn increase_mw_fact<W: Window>(&mut self, windows: &[W], work_area: Rect) -> Vec<Placement> {
        self.adjust_master_fraction(self.fraction_step, windows, work_area)
    }

    pub fn decrease_mw_fact<W: Window>(&mut self, windows: &[W], work_area: Rect) -> Vec<Placement> {
        self.adjust_master_fraction(-self.fraction_step, windows, work_area)
    }

    fn adjust_master_fraction<W: Window>(
        &mut self,
        delta: f64,
        windows: &[W],
        work_area: Rect,
    ) -> Vec<Placement> {
        let fraction = self.layout.master_width_fraction() + delta;
        self.layout.set_master_width_fraction(fraction);
        debug!(
            workspace = %self.id,
            fraction = self.layout.master_width_fraction(),
            "master width fraction changed"
        );
        self.relocate(windows, work_area)
    }
}
