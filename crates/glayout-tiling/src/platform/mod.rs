//! Capability traits the engine needs from a host compositor.
//!
//! A host adapter wraps its native window and workspace objects in these
//! traits. Handles are cheap proxies: the engine never owns a window's
//! lifetime and compares windows only through [`Window::id`].

use glayout_common::types::{Rect, WindowId, WorkspaceId};

pub mod memory;

/// Host event timestamp passed through to focus and activation requests.
pub type Timestamp = u32;

/// A host window handle.
///
/// Every query is answered fresh by the host; mutations are fire-and-forget.
pub trait Window {
    fn id(&self) -> WindowId;
    fn is_hidden(&self) -> bool;
    fn is_maximized_horizontally(&self) -> bool;
    fn is_maximized_vertically(&self) -> bool;
    fn allows_resize(&self) -> bool;
    fn has_focus(&self) -> bool;
    fn focus(&self, timestamp: Timestamp);
    /// Raise the window to the foreground.
    fn activate(&self, timestamp: Timestamp);
    /// Move and resize in one request.
    fn set_geometry(&self, frame: Rect);

    /// Visible, not maximized on either axis, and resizable.
    fn is_tileable(&self) -> bool {
        !self.is_hidden()
            && !self.is_maximized_horizontally()
            && !self.is_maximized_vertically()
            && self.allows_resize()
    }
}

/// A host workspace.
pub trait Workspace {
    type Window: Window;

    fn id(&self) -> WorkspaceId;
    /// All windows on the workspace, tileable or not, in host order.
    fn list_windows(&self) -> Vec<Self::Window>;
    /// Usable area for this workspace across all monitors.
    fn work_area(&self) -> Rect;
}
