//! Line-oriented command grammar for the simulated host.

use glayout_common::{Action, HostError, WindowId, WorkspaceId};

#[derive(Debug, Clone, PartialEq)]
pub enum SimCommand {
    Add(WindowId),
    Remove(WindowId),
    /// Give focus directly, as a mouse click would.
    Focus(WindowId),
    Hide(WindowId),
    Show(WindowId),
    Maximize(WindowId),
    Restore(WindowId),
    /// Switch the active workspace, creating it on first use.
    Workspace(WorkspaceId),
    CloseWorkspace(WorkspaceId),
    Key(String),
    Action(Action),
    List,
    Help,
    Quit,
}

impl SimCommand {
    /// Parse one input line. Returns `Ok(None)` for blank lines and comments.
    pub fn parse(line: &str) -> Result<Option<SimCommand>, HostError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();

        let command = match verb.to_lowercase().as_str() {
            "add" => SimCommand::Add(window_arg(verb, arg)?),
            "remove" | "rm" => SimCommand::Remove(window_arg(verb, arg)?),
            "focus" => SimCommand::Focus(window_arg(verb, arg)?),
            "hide" => SimCommand::Hide(window_arg(verb, arg)?),
            "show" => SimCommand::Show(window_arg(verb, arg)?),
            "maximize" | "max" => SimCommand::Maximize(window_arg(verb, arg)?),
            "restore" => SimCommand::Restore(window_arg(verb, arg)?),
            "workspace" | "ws" => SimCommand::Workspace(WorkspaceId(number_arg(verb, arg)?)),
            "close" => SimCommand::CloseWorkspace(WorkspaceId(number_arg(verb, arg)?)),
            "key" => {
                let combo = arg.ok_or_else(|| usage(verb, "<combo>"))?;
                SimCommand::Key(combo.to_string())
            }
            "list" | "ls" => SimCommand::List,
            "help" | "?" => SimCommand::Help,
            "quit" | "exit" => SimCommand::Quit,
            other => match Action::from_name(other) {
                Some(action) => SimCommand::Action(action),
                None => return Err(HostError::Other(format!("unknown command '{other}'"))),
            },
        };
        Ok(Some(command))
    }
}

fn window_arg(verb: &str, arg: Option<&str>) -> Result<WindowId, HostError> {
    number_arg(verb, arg).map(WindowId)
}

fn number_arg<T: std::str::FromStr>(verb: &str, arg: Option<&str>) -> Result<T, HostError> {
    arg.and_then(|a| a.parse().ok())
        .ok_or_else(|| usage(verb, "<number>"))
}

fn usage(verb: &str, args: &str) -> HostError {
    HostError::Other(format!("usage: {verb} {args}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> SimCommand {
        SimCommand::parse(line).unwrap().unwrap()
    }

    #[test]
    fn window_commands() {
        assert_eq!(parse("add 3"), SimCommand::Add(WindowId(3)));
        assert_eq!(parse("rm 3"), SimCommand::Remove(WindowId(3)));
        assert_eq!(parse("  FOCUS 7 "), SimCommand::Focus(WindowId(7)));
        assert_eq!(parse("hide 1"), SimCommand::Hide(WindowId(1)));
        assert_eq!(parse("max 1"), SimCommand::Maximize(WindowId(1)));
    }

    #[test]
    fn workspace_commands() {
        assert_eq!(parse("ws 2"), SimCommand::Workspace(WorkspaceId(2)));
        assert_eq!(parse("close 2"), SimCommand::CloseWorkspace(WorkspaceId(2)));
    }

    #[test]
    fn action_names() {
        assert_eq!(parse("focus_down"), SimCommand::Action(Action::FocusNext));
        assert_eq!(parse("switch-master"), SimCommand::Action(Action::SwapMaster));
        assert_eq!(
            parse("decrease_mw_fact"),
            SimCommand::Action(Action::DecreaseMasterFraction)
        );
    }

    #[test]
    fn key_keeps_combo_text() {
        assert_eq!(parse("key super+j"), SimCommand::Key("super+j".into()));
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(SimCommand::parse("").unwrap(), None);
        assert_eq!(SimCommand::parse("   # note").unwrap(), None);
    }

    #[test]
    fn errors() {
        assert!(SimCommand::parse("add").is_err());
        assert!(SimCommand::parse("add x").is_err());
        assert!(SimCommand::parse("key").is_err());
        let err = SimCommand::parse("frobnicate").unwrap_err();
        assert!(err.to_string().contains("unknown command 'frobnicate'"));
    }
}
