//! Workspace-level entry points and command dispatch.

use glayout_common::events::Placement;

use crate::commands::TilingCommand;
use crate::platform::{Timestamp, Workspace};

use super::{Outcome, TilingWorkspace};

impl TilingWorkspace {
    /// Full layout pass after a window was added or removed: re-track,
    /// then relocate.
    pub fn layout<S: Workspace>(&mut self, workspace: &S) -> Vec<Placement> {
        let windows = workspace.list_windows();
        self.update(&windows);
        self.relocate(&windows, workspace.work_area())
    }

    /// Run a user command against the host workspace. Never re-tracks.
    pub fn execute<S: Workspace>(
        &mut self,
        command: TilingCommand,
        workspace: &S,
        timestamp: Timestamp,
    ) -> Outcome {
        let windows = workspace.list_windows();
        let work_area = workspace.work_area();

        match command {
            TilingCommand::FocusRelative(offset) => self
                .focus_relative(&windows, offset, timestamp)
                .map_or(Outcome::Unchanged, Outcome::Focused),
            TilingCommand::SwapMaster => self
                .swap_master(&windows, work_area)
                .map_or(Outcome::Unchanged, Outcome::Relocated),
            TilingCommand::IncreaseMasterFraction => {
                Outcome::Relocated(self.increase_mw_fact(&windows, work_area))
            }
            TilingCommand::DecreaseMasterFraction => {
                Outcome::Relocated(self.decrease_mw_fact(&windows, work_area))
            }
        }
    }
}
