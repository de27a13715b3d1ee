use serde::{Deserialize, Serialize};

/// Every user-triggerable tiling action.
///
/// Keybinds and the simulated host both resolve to an `Action`; the
/// controller routes it to the active workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    FocusPrev,
    FocusNext,
    SwapMaster,
    IncreaseMasterFraction,
    DecreaseMasterFraction,
}
