//! Window and workspace lifecycle signals.

use glayout_common::{Event, Placement, WindowId, WorkspaceId};
use glayout_tiling::Workspace;
use tracing::{debug, info};

use super::TilingController;

impl TilingController {
    pub fn on_window_added<S: Workspace>(
        &mut self,
        workspace: &S,
        window: WindowId,
    ) -> Vec<Placement> {
        debug!(workspace = %workspace.id(), %window, "window added");
        self.retile(workspace)
    }

    pub fn on_window_removed<S: Workspace>(
        &mut self,
        workspace: &S,
        window: WindowId,
    ) -> Vec<Placement> {
        debug!(workspace = %workspace.id(), %window, "window removed");
        self.retile(workspace)
    }

    /// Forget a workspace the host has destroyed. Returns `true` if it
    /// had tiling state.
    pub fn on_workspace_removed(&mut self, id: WorkspaceId) -> bool {
        if self.registry.remove(id).is_none() {
            return false;
        }
        self.publish(Event::WorkspacePruned(id));
        true
    }

    fn retile<S: Workspace>(&mut self, workspace: &S) -> Vec<Placement> {
        let id = workspace.id();
        let tws = self.registry.get_or_create(id);
        let placements = tws.layout(workspace);
        let count = tws.tileable_windows().len();

        info!(workspace = %id, tracked = count, placed = placements.len(), "retiled");
        self.publish(Event::WindowsTracked {
            workspace: id,
            count,
        });
        if !placements.is_empty() {
            self.publish(Event::LayoutApplied {
                workspace: id,
                placements: placements.clone(),
            });
        }
        placements
    }
}
