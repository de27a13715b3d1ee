//! Focus navigation across tileable and floating windows.

use std::collections::{HashMap, HashSet};

use glayout_common::types::WindowId;
use tracing::debug;

use crate::platform::{Timestamp, Window};

use super::TilingWorkspace;

impl TilingWorkspace {
    /// Windows in navigation order: tracked windows in tiling order,
    /// then every other host window in host order.
    pub fn focus_order<'a, W: Window>(&self, windows: &'a [W]) -> Vec<&'a W> {
        let handles: HashMap<WindowId, &W> = windows.iter().map(|w| (w.id(), w)).collect();
        let tracked: HashSet<WindowId> = self.tileable.iter().copied().collect();

        let mut order: Vec<&W> = self
            .tileable
            .iter()
            .filter_map(|id| handles.get(id).copied())
            .collect();
        order.extend(windows.iter().filter(|w| !tracked.contains(&w.id())));
        order
    }

    /// Focus and raise the window `offset` positions away from the focused
    /// one in [`focus_order`](Self::focus_order).
    ///
    /// Wraparound is a single step, so only `|offset| <= len` lands on the
    /// intended window. With nothing focused, the search starts one past
    /// the end. Returns the newly focused window, or `None` if the target
    /// fell outside the ordering.
    pub fn focus_relative<W: Window>(
        &self,
        windows: &[W],
        offset: i32,
        timestamp: Timestamp,
    ) -> Option<WindowId> {
        let order = self.focus_order(windows);
        let len = order.len() as i64;
        let current = order
            .iter()
            .position(|w| w.has_focus())
            .unwrap_or(order.len()) as i64;

        let mut target = current + i64::from(offset);
        if target < 0 {
            target += len;
        } else if target >= len {
            target -= len;
        }

        if !(0..len).contains(&target) {
            debug!(workspace = %self.id, offset, "focus target out of range");
            return None;
        }

        let window = order[target as usize];
        window.focus(timestamp);
        window.activate(timestamp);
        debug!(workspace = %self.id, window = %window.id(), "focus moved");
        Some(window.id())
    }
}
