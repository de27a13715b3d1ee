use super::Action;

impl Action {
    /// Human-readable label for help output.
    pub fn label(&self) -> &'static str {
        match self {
            Action::FocusPrev => "Focus Previous Window",
            Action::FocusNext => "Focus Next Window",
            Action::SwapMaster => "Promote Focused To Master",
            Action::IncreaseMasterFraction => "Grow Master Column",
            Action::DecreaseMasterFraction => "Shrink Master Column",
        }
    }

    /// Keybinding name, as used in the config file.
    pub fn binding_name(&self) -> &'static str {
        match self {
            Action::FocusPrev => "focus_up",
            Action::FocusNext => "focus_down",
            Action::SwapMaster => "switch_master",
            Action::IncreaseMasterFraction => "increase_mw_fact",
            Action::DecreaseMasterFraction => "decrease_mw_fact",
        }
    }

    /// Resolve a binding name. Dashes and underscores are interchangeable.
    pub fn from_name(name: &str) -> Option<Action> {
        let normalized = name.trim().to_lowercase().replace('-', "_");
        Self::all()
            .into_iter()
            .find(|action| action.binding_name() == normalized)
    }

    pub fn all() -> Vec<Action> {
        vec![
            Action::FocusPrev,
            Action::FocusNext,
            Action::SwapMaster,
            Action::IncreaseMasterFraction,
            Action::DecreaseMasterFraction,
        ]
    }
}
