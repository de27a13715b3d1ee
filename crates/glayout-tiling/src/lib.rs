pub mod commands;
pub mod layout;
pub mod platform;
pub mod registry;
pub mod workspace;

pub use commands::TilingCommand;
pub use layout::MasterStackLayout;
pub use platform::{Timestamp, Window, Workspace};
pub use registry::WorkspaceRegistry;
pub use workspace::{Outcome, TilingSettings, TilingWorkspace};
