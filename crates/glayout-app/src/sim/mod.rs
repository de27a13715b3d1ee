//! Simulated host driven by text commands.
//!
//! Stands in for a compositor: windows live in [`MemoryWorkspace`]s, and
//! every command is forwarded to the [`TilingController`] the same way a
//! real host adapter would forward its signals. Engine events are printed
//! after each command.

mod command;
mod render;


use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use glayout_common::{Action, Event, EventBus, HostError, Rect, WindowId, WorkspaceId};
use glayout_tiling::platform::memory::MemoryWorkspace;
use glayout_tiling::{Timestamp, Window, Workspace};
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;

pub use command::SimCommand;

use crate::controller::TilingController;
use crate::input::KeyCombo;

const EVENT_CAPACITY: usize = 256;

pub struct Simulator {
    controller: TilingController,
    workspaces: BTreeMap<WorkspaceId, MemoryWorkspace>,
    active: WorkspaceId,
    work_area: Rect,
    clock: Timestamp,
    events: Receiver<Event>,
}

impl Simulator {
    /// Attach a fresh event bus to `controller` and open workspace 0.
    pub fn new(controller: TilingController, work_area: Rect) -> Self {
        let bus = EventBus::new(EVENT_CAPACITY);
        let events = bus.subscribe();
        let controller = controller.with_event_bus(bus);
        if let Some(bus) = controller.events() {
            bus.publish(Event::ConfigLoaded);
        }

        let active = WorkspaceId(0);
        let mut workspaces = BTreeMap::new();
        workspaces.insert(active, MemoryWorkspace::new(active, work_area));

        Self {
            controller,
            workspaces,
            active,
            work_area,
            clock: 0,
            events,
        }
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "glayout simulated host; type 'help' for commands")?;
        self.flush_events(out)?;

        for line in input.lines() {
            let line = line?;
            let command = match SimCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(out, "error: {e}")?;
                    continue;
                }
            };
            if command == SimCommand::Quit {
                break;
            }
            if let Err(e) = self.execute(command, out) {
                writeln!(out, "error: {e}")?;
            }
            self.flush_events(out)?;
        }

        tracing::info!(
            workspaces = self.workspaces.len(),
            tiled = self.controller.registry().len(),
            "simulated host finished"
        );
        Ok(())
    }

    /// Apply one command to the simulated host. I/O failures on `out` are
    /// reported as [`HostError::Other`].
    pub fn execute<W: Write>(
        &mut self,
        command: SimCommand,
        out: &mut W,
    ) -> Result<(), HostError> {
        self.clock = self.clock.wrapping_add(1);
        let timestamp = self.clock;

        match command {
            SimCommand::Workspace(id) => {
                let area = self.work_area;
                self.workspaces
                    .entry(id)
                    .or_insert_with(|| MemoryWorkspace::new(id, area));
                self.active = id;
                tracing::debug!(workspace = %id, "switched workspace");
                return Ok(());
            }
            SimCommand::CloseWorkspace(id) => return self.close_workspace(id),
            SimCommand::Help => return self.help(out).map_err(io_error),
            SimCommand::List => return self.list(out).map_err(io_error),
            SimCommand::Quit => return Ok(()),
            _ => {}
        }

        let ws = self
            .workspaces
            .get(&self.active)
            .ok_or(HostError::UnknownWorkspace(self.active.0))?;

        match command {
            SimCommand::Add(id) => {
                if ws.contains(id) {
                    return Err(HostError::Other(format!("{id} already exists")));
                }
                ws.add_window(id);
                self.controller.on_window_added(ws, id);
            }
            SimCommand::Remove(id) => {
                if !ws.remove_window(id) {
                    return Err(unknown_window(id));
                }
                self.controller.on_window_removed(ws, id);
            }
            SimCommand::Focus(id) => {
                require_window(ws, id)?;
                ws.set_focus(Some(id));
            }
            SimCommand::Hide(id) => {
                require_window(ws, id)?;
                ws.set_hidden(id, true);
            }
            SimCommand::Show(id) => {
                require_window(ws, id)?;
                ws.set_hidden(id, false);
            }
            SimCommand::Maximize(id) => {
                require_window(ws, id)?;
                ws.set_maximized(id, true, true);
            }
            SimCommand::Restore(id) => {
                require_window(ws, id)?;
                ws.set_maximized(id, false, false);
            }
            SimCommand::Key(text) => {
                let combo = KeyCombo::parse(&text).map_err(|e| HostError::InvalidKeybind {
                    binding: text.clone(),
                    reason: e.to_string(),
                })?;
                if self.controller.handle_key(&combo, ws, timestamp).is_none() {
                    writeln!(out, "unbound: {combo}").map_err(io_error)?;
                }
            }
            SimCommand::Action(action) => {
                self.controller.dispatch(action, ws, timestamp);
            }
            SimCommand::Workspace(_)
            | SimCommand::CloseWorkspace(_)
            | SimCommand::List
            | SimCommand::Help
            | SimCommand::Quit => {}
        }
        Ok(())
    }

    fn close_workspace(&mut self, id: WorkspaceId) -> Result<(), HostError> {
        if self.workspaces.remove(&id).is_none() {
            return Err(HostError::UnknownWorkspace(id.0));
        }
        self.controller.on_workspace_removed(id);

        if self.active == id {
            let next = self.workspaces.keys().next().copied().unwrap_or(WorkspaceId(0));
            let area = self.work_area;
            self.workspaces
                .entry(next)
                .or_insert_with(|| MemoryWorkspace::new(next, area));
            self.active = next;
        }
        Ok(())
    }

    fn list<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let Some(ws) = self.workspaces.get(&self.active) else {
            return Ok(());
        };
        let tiling = self.controller.workspace(self.active);
        let master = tiling.and_then(|t| t.master());

        writeln!(out, "{} ({})", self.active, ws.work_area())?;
        if let Some(t) = tiling {
            writeln!(out, "  master fraction {:.2}", t.master_width_fraction())?;
        }
        for window in ws.list_windows() {
            let id = window.id();
            let mut flags = Vec::new();
            if master == Some(id) {
                flags.push("master");
            } else if tiling.is_some_and(|t| t.contains(id)) {
                flags.push("stack");
            }
            if window.has_focus() {
                flags.push("focused");
            }
            if window.is_hidden() {
                flags.push("hidden");
            }
            if window.is_maximized_horizontally() || window.is_maximized_vertically() {
                flags.push("maximized");
            }
            let frame = ws
                .frame(id)
                .map_or_else(|| "unplaced".to_string(), |r| r.to_string());
            writeln!(out, "  {id} {frame} [{}]", flags.join(" "))?;
        }
        Ok(())
    }

    fn help<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "commands:")?;
        writeln!(out, "  add|remove|focus|hide|show|maximize|restore <window>")?;
        writeln!(out, "  workspace <n>   switch workspace")?;
        writeln!(out, "  close <n>       destroy workspace")?;
        writeln!(out, "  key <combo>     press a key, e.g. key super+j")?;
        writeln!(out, "  list | help | quit")?;
        writeln!(out, "actions:")?;
        if self.controller.keybinds().is_empty() {
            writeln!(out, "  (no keys bound)")?;
        }
        for action in Action::all() {
            let key = self
                .controller
                .keybinds()
                .keybind_for_action(action)
                .unwrap_or_else(|| "unbound".into());
            writeln!(
                out,
                "  {:<18} {:<16} {}",
                action.binding_name(),
                key,
                action.label()
            )?;
        }
        Ok(())
    }

    fn flush_events<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    for line in render::render(&event) {
                        writeln!(out, "{line}")?;
                    }
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "event output fell behind");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return Ok(()),
            }
        }
    }
}

fn require_window(ws: &MemoryWorkspace, id: WindowId) -> Result<(), HostError> {
    if ws.contains(id) {
        Ok(())
    } else {
        Err(unknown_window(id))
    }
}

fn unknown_window(id: WindowId) -> HostError {
    HostError::Other(format!("no such window: {id}"))
}

fn io_error(e: io::Error) -> HostError {
    HostError::Other(e.to_string())
}
