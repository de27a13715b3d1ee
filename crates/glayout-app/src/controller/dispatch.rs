//! Action dispatch from key presses.

use glayout_common::{Action, Event};
use glayout_tiling::{Outcome, Timestamp, Workspace};
use tracing::debug;

use super::TilingController;
use crate::input::KeyCombo;

impl TilingController {
    /// Run `action` against the tiling state of `workspace`.
    pub fn dispatch<S: Workspace>(
        &mut self,
        action: Action,
        workspace: &S,
        timestamp: Timestamp,
    ) -> Outcome {
        let id = workspace.id();
        let tws = self.registry.get_or_create(id);
        let outcome = tws.execute(action.into(), workspace, timestamp);
        let fraction = tws.master_width_fraction();

        match &outcome {
            Outcome::Unchanged => {
                debug!(workspace = %id, action = action.binding_name(), "nothing to do");
            }
            Outcome::Focused(window) => {
                self.publish(Event::FocusChanged {
                    workspace: id,
                    window: *window,
                });
            }
            Outcome::Relocated(placements) => {
                if matches!(
                    action,
                    Action::IncreaseMasterFraction | Action::DecreaseMasterFraction
                ) {
                    self.publish(Event::MasterFractionChanged {
                        workspace: id,
                        fraction,
                    });
                }
                if !placements.is_empty() {
                    self.publish(Event::LayoutApplied {
                        workspace: id,
                        placements: placements.clone(),
                    });
                }
            }
        }
        outcome
    }

    /// Look up `combo` and dispatch its action. Returns `None` when the
    /// combo is unbound.
    pub fn handle_key<S: Workspace>(
        &mut self,
        combo: &KeyCombo,
        workspace: &S,
        timestamp: Timestamp,
    ) -> Option<Outcome> {
        let Some(action) = self.keybinds.lookup(combo) else {
            debug!(%combo, "unbound key");
            return None;
        };
        Some(self.dispatch(action, workspace, timestamp))
    }
}
