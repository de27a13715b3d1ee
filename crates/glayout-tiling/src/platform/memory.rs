//! In-memory host implementation.
//!
//! Backs the simulated host in the `glayout` binary and the engine's tests.
//! Window handles are proxies over shared workspace state, so two handles
//! with the same id always observe the same window.

use std::cell::RefCell;
use std::rc::Rc;

use glayout_common::events::Placement;
use glayout_common::types::{Rect, WindowId, WorkspaceId};

use super::{Timestamp, Window, Workspace};

#[derive(Debug, Clone)]
struct WindowState {
    id: WindowId,
    hidden: bool,
    maximized_horizontally: bool,
    maximized_vertically: bool,
    resizable: bool,
    frame: Option<Rect>,
}

impl WindowState {
    fn new(id: WindowId) -> Self {
        Self {
            id,
            hidden: false,
            maximized_horizontally: false,
            maximized_vertically: false,
            resizable: true,
            frame: None,
        }
    }
}

#[derive(Debug, Default)]
struct HostState {
    windows: Vec<WindowState>,
    focused: Option<WindowId>,
    foreground: Option<WindowId>,
    last_timestamp: Option<Timestamp>,
    geometry_log: Vec<Placement>,
}

impl HostState {
    fn window(&self, id: WindowId) -> Option<&WindowState> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn window_mut(&mut self, id: WindowId) -> Option<&mut WindowState> {
        self.windows.iter_mut().find(|w| w.id == id)
    }
}

/// A simulated workspace holding its windows in insertion order.
#[derive(Debug, Clone)]
pub struct MemoryWorkspace {
    id: WorkspaceId,
    work_area: Rc<RefCell<Rect>>,
    state: Rc<RefCell<HostState>>,
}

/// A proxy handle to one window of a [`MemoryWorkspace`].
///
/// Handles outlive the window they point at; once the window is removed
/// it reports itself hidden and ignores mutations.
#[derive(Debug, Clone)]
pub struct MemoryWindow {
    id: WindowId,
    state: Rc<RefCell<HostState>>,
}

impl MemoryWorkspace {
    pub fn new(id: WorkspaceId, work_area: Rect) -> Self {
        Self {
            id,
            work_area: Rc::new(RefCell::new(work_area)),
            state: Rc::new(RefCell::new(HostState::default())),
        }
    }

    /// Append a tileable window. Adding an existing id returns a new handle
    /// to the existing window.
    pub fn add_window(&self, id: WindowId) -> MemoryWindow {
        let mut state = self.state.borrow_mut();
        if state.window(id).is_none() {
            state.windows.push(WindowState::new(id));
        }
        MemoryWindow {
            id,
            state: Rc::clone(&self.state),
        }
    }

    /// Returns `true` if the window existed.
    pub fn remove_window(&self, id: WindowId) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.windows.len();
        state.windows.retain(|w| w.id != id);
        if state.focused == Some(id) {
            state.focused = None;
        }
        if state.foreground == Some(id) {
            state.foreground = None;
        }
        state.windows.len() != before
    }

    pub fn window(&self, id: WindowId) -> Option<MemoryWindow> {
        self.state.borrow().window(id).map(|_| MemoryWindow {
            id,
            state: Rc::clone(&self.state),
        })
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.state.borrow().window(id).is_some()
    }

    pub fn set_hidden(&self, id: WindowId, hidden: bool) {
        if let Some(w) = self.state.borrow_mut().window_mut(id) {
            w.hidden = hidden;
        }
    }

    pub fn set_maximized(&self, id: WindowId, horizontally: bool, vertically: bool) {
        if let Some(w) = self.state.borrow_mut().window_mut(id) {
            w.maximized_horizontally = horizontally;
            w.maximized_vertically = vertically;
        }
    }

    pub fn set_resizable(&self, id: WindowId, resizable: bool) {
        if let Some(w) = self.state.borrow_mut().window_mut(id) {
            w.resizable = resizable;
        }
    }

    /// Give keyboard focus to a window directly, as a user click would.
    pub fn set_focus(&self, id: Option<WindowId>) {
        let mut state = self.state.borrow_mut();
        let focused = id.filter(|id| state.window(*id).is_some());
        state.focused = focused;
    }

    pub fn focused(&self) -> Option<WindowId> {
        self.state.borrow().focused
    }

    /// Window most recently raised through [`Window::activate`].
    pub fn foreground(&self) -> Option<WindowId> {
        self.state.borrow().foreground
    }

    pub fn last_timestamp(&self) -> Option<Timestamp> {
        self.state.borrow().last_timestamp
    }

    pub fn frame(&self, id: WindowId) -> Option<Rect> {
        self.state.borrow().window(id).and_then(|w| w.frame)
    }

    pub fn set_work_area(&self, area: Rect) {
        *self.work_area.borrow_mut() = area;
    }

    /// Every geometry request received, oldest first.
    pub fn geometry_log(&self) -> Vec<Placement> {
        self.state.borrow().geometry_log.clone()
    }

    pub fn clear_geometry_log(&self) {
        self.state.borrow_mut().geometry_log.clear();
    }

    pub fn window_ids(&self) -> Vec<WindowId> {
        self.state.borrow().windows.iter().map(|w| w.id).collect()
    }
}

impl Workspace for MemoryWorkspace {
    type Window = MemoryWindow;

    fn id(&self) -> WorkspaceId {
        self.id
    }

    fn list_windows(&self) -> Vec<MemoryWindow> {
        self.window_ids()
            .into_iter()
            .map(|id| MemoryWindow {
                id,
                state: Rc::clone(&self.state),
            })
            .collect()
    }

    fn work_area(&self) -> Rect {
        *self.work_area.borrow()
    }
}

impl MemoryWindow {
    fn query(&self, f: impl FnOnce(&WindowState) -> bool, missing: bool) -> bool {
        self.state.borrow().window(self.id).map(f).unwrap_or(missing)
    }
}

impl Window for MemoryWindow {
    fn id(&self) -> WindowId {
        self.id
    }

    fn is_hidden(&self) -> bool {
        self.query(|w| w.hidden, true)
    }

    fn is_maximized_horizontally(&self) -> bool {
        self.query(|w| w.maximized_horizontally, false)
    }

    fn is_maximized_vertically(&self) -> bool {
        self.query(|w| w.maximized_vertically, false)
    }

    fn allows_resize(&self) -> bool {
        self.query(|w| w.resizable, false)
    }

    fn has_focus(&self) -> bool {
        self.state.borrow().focused == Some(self.id)
    }

    fn focus(&self, timestamp: Timestamp) {
        let mut state = self.state.borrow_mut();
        if state.window(self.id).is_some() {
            state.focused = Some(self.id);
            state.last_timestamp = Some(timestamp);
        }
    }

    fn activate(&self, timestamp: Timestamp) {
        let mut state = self.state.borrow_mut();
        if state.window(self.id).is_some() {
            state.foreground = Some(self.id);
            state.focused = Some(self.id);
            state.last_timestamp = Some(timestamp);
        }
    }

    fn set_geometry(&self, frame: Rect) {
        let mut state = self.state.borrow_mut();
        let Some(w) = state.window_mut(self.id) else {
            return;
        };
        w.frame = Some(frame);
        state.geometry_log.push(Placement {
            window: self.id,
            frame,
        });
    }
}
