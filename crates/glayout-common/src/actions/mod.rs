mod action_enum;
mod dispatch;

pub use action_enum::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_actions_have_labels() {
        for action in Action::all() {
            assert!(!action.label().is_empty(), "action {:?} has empty label", action);
        }
    }

    #[test]
    fn all_lists_every_action_once() {
        let all = Action::all();
        assert_eq!(all.len(), 5);
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn action_serde_roundtrip() {
        for action in Action::all() {
            let json = serde_json::to_string(&action).unwrap();
            let deserialized: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(action, deserialized);
        }
    }

    #[test]
    fn action_from_name() {
        assert_eq!(Action::from_name("focus-down"), Some(Action::FocusNext));
        assert_eq!(Action::from_name("switch_master"), Some(Action::SwapMaster));
        assert_eq!(Action::from_name("INCREASE-MW-FACT"), Some(Action::IncreaseMasterFraction));
        assert_eq!(Action::from_name("zoom"), None);
    }
}
