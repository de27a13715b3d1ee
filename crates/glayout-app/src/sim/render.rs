use glayout_common::Event;

/// Human-readable lines for one engine event.
pub fn render(event: &Event) -> Vec<String> {
    match event {
        Event::ConfigLoaded => vec!["config loaded".into()],
        Event::WindowsTracked { workspace, count } => {
            vec![format!("{workspace}: tracking {count} window(s)")]
        }
        Event::LayoutApplied {
            workspace,
            placements,
        } => placements
            .iter()
            .map(|p| format!("{workspace}: {} -> {}", p.window, p.frame))
            .collect(),
        Event::FocusChanged { workspace, window } => {
            vec![format!("{workspace}: focus {window}")]
        }
        Event::MasterFractionChanged {
            workspace,
            fraction,
        } => vec![format!("{workspace}: master fraction {fraction:.2}")],
        Event::WorkspacePruned(workspace) => vec![format!("{workspace}: pruned")],
        Event::Unknown => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glayout_common::{Placement, Rect, WindowId, WorkspaceId};

    #[test]
    fn layout_renders_one_line_per_window() {
        let lines = render(&Event::LayoutApplied {
            workspace: WorkspaceId(0),
            placements: vec![
                Placement {
                    window: WindowId(1),
                    frame: Rect::new(0, 80, 500, 800),
                },
                Placement {
                    window: WindowId(2),
                    frame: Rect::new(500, 80, 500, 800),
                },
            ],
        });
        assert_eq!(
            lines,
            vec![
                "workspace-0: window-1 -> 500x800+0+80",
                "workspace-0: window-2 -> 500x800+500+80",
            ]
        );
    }

    #[test]
    fn fraction_is_rounded() {
        let lines = render(&Event::MasterFractionChanged {
            workspace: WorkspaceId(1),
            fraction: 0.6000000000000001,
        });
        assert_eq!(lines, vec!["workspace-1: master fraction 0.60"]);
    }
}
