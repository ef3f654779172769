//! Workspace engine coordinating panels and gestures
//!
//! This module is split into focused submodules:
//! - `input`: Pointer event dispatch and hit testing
//! - `moving`: Title bar move gesture
//! - `sizing`: Edge/corner resize gesture and anchor propagation
//! - `island`: Anchor island discovery
//! - `timer`: Detach timer for motionless resize holds
//! - `rulers`: Per-side snap guide bookkeeping

mod input;
mod moving;
mod sizing;
mod island;
mod timer;
mod rulers;

use serde::Serialize;
use tracing::debug;
use crate::config::WorkspaceConfig;
use crate::container::{Container, PanelManager};
use crate::error::PanelError;
use crate::input::InputRouter;
use crate::math::Vec2i;
use crate::panel::{ContainerId, Panel, PanelId};
use crate::window::WindowConfig;

pub use island::take_connected;
pub use timer::DetachTimer;

/// Absolute frame of a panel, reported to the host renderer
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PanelFrame {
    pub id: PanelId,
    pub container: ContainerId,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Title for windows, None for plain panels
    pub title: Option<String>,
}

/// Workspace engine coordinating panel components
///
/// This is the main entry point for panel operations, managing:
/// - Panel manager (ownership, containers, snap queries, rulers)
/// - Input router (which windows receive pointer move/up)
/// - Detach timers for motionless resize holds
pub struct Workspace {
    /// Panel manager
    pub panels: PanelManager,
    /// Input router
    pub input: InputRouter,
    pub(crate) config: WorkspaceConfig,
    /// Cursor requested by the active gesture
    pub(crate) cursor: &'static str,
    pub(crate) timers: Vec<DetachTimer>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// Create a workspace with the default configuration
    pub fn new() -> Self {
        Self::build(WorkspaceConfig::default())
    }

    /// Create a workspace, rejecting a configuration that fails
    /// [`WorkspaceConfig::validate`]
    pub fn with_config(config: WorkspaceConfig) -> Result<Self, PanelError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: WorkspaceConfig) -> Self {
        Self {
            panels: PanelManager::new(config.style),
            input: InputRouter::new(),
            config,
            cursor: "default",
            timers: Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// Cursor the host should show while a gesture runs
    #[inline]
    pub fn cursor(&self) -> &'static str {
        self.cursor
    }

    /// Create a window and attach it to `container`
    pub fn add_window(&mut self, config: WindowConfig, container: ContainerId) -> Result<PanelId, PanelError> {
        let id = self.panels.create_window(config);
        self.attach_new(id, container)
    }

    /// Create a plain panel and attach it to `container`
    pub fn add_panel(&mut self, position: Vec2i, size: Vec2i, container: ContainerId) -> Result<PanelId, PanelError> {
        let id = self.panels.create_panel(position, size);
        self.attach_new(id, container)
    }

    fn attach_new(&mut self, id: PanelId, container: ContainerId) -> Result<PanelId, PanelError> {
        if let Err(e) = self.panels.attach(id, container) {
            self.panels.discard(id);
            return Err(e);
        }
        debug!(id, ?container, "panel attached");
        Ok(id)
    }

    /// Take a panel out of its container; a running gesture keeps
    /// updating its frame but no longer snaps
    pub fn detach(&mut self, id: PanelId) -> Result<(), PanelError> {
        self.panels.detach(id)?;
        debug!(id, "panel detached");
        Ok(())
    }

    /// Destroy a panel and its nested panels, ending any gesture on them
    pub fn remove(&mut self, id: PanelId) -> Result<Panel, PanelError> {
        if self.panels.get(id).is_none() {
            return Err(PanelError::UnknownPanel(id));
        }

        let mut doomed = vec![id];
        let mut i = 0;
        while i < doomed.len() {
            let parent = doomed[i];
            doomed.extend_from_slice(self.panels.members(ContainerId::Panel(parent)));
            i += 1;
        }

        for &pid in &doomed {
            if self.input.is_subscribed(pid) {
                let moving = self.panels.get(pid).and_then(Panel::window).is_some_and(|w| w.is_moving());
                if moving {
                    self.end_move(pid);
                } else {
                    self.end_resize(pid);
                }
            }
        }
        self.timers.retain(|t| !doomed.contains(&t.window));

        debug!(id, nested = doomed.len() - 1, "panel removed");
        self.panels.destroy(id)
    }

    /// Request a layout pass for the container holding `id`
    pub(crate) fn request_layout(&mut self, id: PanelId) {
        if let Some(container) = self.panels.get(id).and_then(Panel::container) {
            self.panels.update_control_sizes(container);
        }
    }

    /// Absolute frames of every attached panel, back to front, parents
    /// before their children
    pub fn frames(&self) -> Vec<PanelFrame> {
        let mut frames = Vec::with_capacity(self.panels.count());
        self.collect_frames(ContainerId::Root, Vec2i::ZERO, &mut frames);
        frames
    }

    fn collect_frames(&self, container: ContainerId, origin: Vec2i, out: &mut Vec<PanelFrame>) {
        for &id in self.panels.members(container) {
            let Some(panel) = self.panels.get(id) else {
                continue;
            };
            let pos = origin + panel.position;
            out.push(PanelFrame {
                id,
                container,
                x: pos.x,
                y: pos.y,
                width: panel.size.x,
                height: panel.size.y,
                title: panel.window().map(|w| w.title.clone()),
            });
            self.collect_frames(ContainerId::Panel(id), pos, out);
        }
    }
}
