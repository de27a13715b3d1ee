pub mod actions;
pub mod errors;
pub mod events;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, GlayoutError, HostError};
pub use events::{Event, EventBus, Placement};
pub use types::{Rect, WindowId, WorkspaceId};
