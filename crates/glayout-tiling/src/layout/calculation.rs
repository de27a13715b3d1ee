//! Layout calculation: ordered window list to rectangles.

use glayout_common::types::{Rect, WindowId};

use super::MasterStackLayout;

impl MasterStackLayout {
    /// Compute one rectangle per window, master first, then the stack top
    /// to bottom.
    ///
    /// Windows are placed from x = 0 and y = `vertical_offset`; the work
    /// area only contributes its size. Stack heights use floor division, so
    /// when the height does not divide evenly a strip of up to
    /// `stack_count - 1` pixels stays uncovered below the last window.
    /// Stack positions saturate at `u32::MAX`.
    pub fn compute(&self, windows: &[WindowId], work_area: Rect) -> Vec<(WindowId, Rect)> {
        let y = self.vertical_offset;

        match windows {
            [] => Vec::new(),
            [only] => vec![(*only, Rect::new(0, y, work_area.width, work_area.height))],
            [master, stack @ ..] => {
                let master_width = self.master_width(work_area.width);
                let stack_width = work_area.width - master_width;
                // stack is non-empty in this arm
                let stack_height = work_area.height / stack.len() as u32;

                let mut out = Vec::with_capacity(windows.len());
                out.push((*master, Rect::new(0, y, master_width, work_area.height)));
                let mut top = y;
                for id in stack {
                    let frame = Rect::new(master_width, top, stack_width, stack_height);
                    // Saturates instead of wrapping for offsets near u32::MAX.
                    top = frame.bottom();
                    out.push((*id, frame));
                }
                out
            }
        }
    }

    /// `floor(width * fraction)`, never wider than the work area.
    pub fn master_width(&self, width: u32) -> u32 {
        let master = (f64::from(width) * self.master_width_fraction).floor();
        (master as u32).min(width)
    }
}
