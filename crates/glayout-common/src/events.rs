use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{Rect, WindowId, WorkspaceId};

/// One window frame applied during a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub window: WindowId,
    pub frame: Rect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    ConfigLoaded,
    WindowsTracked {
        workspace: WorkspaceId,
        count: usize,
    },
    LayoutApplied {
        workspace: WorkspaceId,
        placements: Vec<Placement>,
    },
    FocusChanged {
        workspace: WorkspaceId,
        window: WindowId,
    },
    MasterFractionChanged {
        workspace: WorkspaceId,
        fraction: f64,
    },
    WorkspacePruned(WorkspaceId),
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers that received the event.
    pub fn publish(&self, event: Event) -> usize {
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                tracing::trace!("event dropped, no subscribers");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::ConfigLoaded);

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, Event::ConfigLoaded));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(Event::WorkspacePruned(WorkspaceId(2)));

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert!(matches!(e1, Event::WorkspacePruned(WorkspaceId(2))));
        assert!(matches!(e2, Event::WorkspacePruned(WorkspaceId(2))));
    }

    #[tokio::test]
    async fn layout_events_keep_placement_order() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let workspace = WorkspaceId(0);

        bus.publish(Event::WindowsTracked {
            workspace,
            count: 2,
        });
        bus.publish(Event::LayoutApplied {
            workspace,
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

        let e1 = rx.recv().await.unwrap();
        assert!(matches!(e1, Event::WindowsTracked { count: 2, .. }));

        let e2 = rx.recv().await.unwrap();
        match e2 {
            Event::LayoutApplied { placements, .. } => {
                let ids: Vec<_> = placements.iter().map(|p| p.window).collect();
                assert_eq!(ids, vec![WindowId(1), WindowId(2)]);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        let count = bus.publish(Event::ConfigLoaded);
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();
        let _rx3 = bus.subscribe();

        let count = bus.publish(Event::ConfigLoaded);
        assert_eq!(count, 3);
    }

    #[test]
    fn try_recv_without_runtime() {
        let bus = EventBus::new(4);
        let mut rx = bus.subscribe();
        bus.publish(Event::FocusChanged {
            workspace: WorkspaceId(1),
            window: WindowId(9),
        });
        let event = rx.try_recv().unwrap();
        assert!(matches!(
            event,
            Event::FocusChanged {
                window: WindowId(9),
                ..
            }
        ));
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomeNewEventWeNeverHeardOf","data":null}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(matches!(event, Event::Unknown));
    }
}
