use glayout_common::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilingCommand {
    /// Move focus by a signed number of positions. Only `±1` is guaranteed
    /// to wrap correctly.
    FocusRelative(i32),
    SwapMaster,
    IncreaseMasterFraction,
    DecreaseMasterFraction,
}

impl From<Action> for TilingCommand {
    fn from(action: Action) -> Self {
        match action {
            Action::FocusPrev => TilingCommand::FocusRelative(-1),
            Action::FocusNext => TilingCommand::FocusRelative(1),
            Action::SwapMaster => TilingCommand::SwapMaster,
            Action::IncreaseMasterFraction => TilingCommand::IncreaseMasterFraction,
            Action::DecreaseMasterFraction => TilingCommand::DecreaseMasterFraction,
        }
    }
}
