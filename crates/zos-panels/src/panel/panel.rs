//! Panel struct and container handle

use serde::{Deserialize, Serialize};
use crate::math::{Aabb, Vec2i};
use crate::window::{Resizable, Window};
use super::PanelId;

/// Non-owning handle to the container a panel lives in
///
/// Root panels are positioned in workspace coordinates; panels nested in
/// a window's body are positioned relative to that window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerId {
    Root,
    Panel(PanelId),
}

/// A positionable, resizable rectangle
#[derive(Clone, Debug)]
pub struct Panel {
    /// Unique identifier
    pub id: PanelId,
    /// Top-left corner in the container's space
    pub position: Vec2i,
    pub size: Vec2i,
    /// Container this panel is attached to (None = detached)
    pub(crate) container: Option<ContainerId>,
    /// Window chrome and gesture state, present for windows only
    pub(crate) window: Option<Window>,
}

impl Panel {
    pub(crate) fn new(id: PanelId, position: Vec2i, size: Vec2i, window: Option<Window>) -> Self {
        Self {
            id,
            position,
            size,
            container: None,
            window,
        }
    }

    #[inline]
    pub fn top_left(&self) -> Vec2i {
        self.position
    }

    #[inline]
    pub fn bottom_right(&self) -> Vec2i {
        self.position + self.size
    }

    /// Bounding box in the container's space
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.position, self.size)
    }

    #[inline]
    pub fn container(&self) -> Option<ContainerId> {
        self.container
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.container.is_some()
    }

    #[inline]
    pub fn is_window(&self) -> bool {
        self.window.is_some()
    }

    #[inline]
    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    #[inline]
    pub fn window_mut(&mut self) -> Option<&mut Window> {
        self.window.as_mut()
    }

    /// Resize capability, if this panel variant has one
    pub fn as_resizable(&self) -> Option<&dyn Resizable> {
        self.window.as_ref().map(|w| w as &dyn Resizable)
    }

    /// Mutable resize capability, if this panel variant has one
    pub fn as_resizable_mut(&mut self) -> Option<&mut dyn Resizable> {
        self.window.as_mut().map(|w| w as &mut dyn Resizable)
    }
}
