//! Drag snapshots for window gestures

use crate::math::{Mask, Vec2i};
use super::{calculate_resize, clamp_resize};

/// Snapshot taken when a resize gesture begins
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeDrag {
    /// Pointer position at start (workspace coords)
    pub start_pointer: Vec2i,
    /// Panel position at start
    pub start_position: Vec2i,
    /// Panel size at start
    pub start_size: Vec2i,
    /// Edges being dragged
    pub mask: Mask,
    /// Per-axis sign applied to incoming offsets
    pub scale: Vec2i,
    /// Driven by the pointer (true) or by another panel's gesture
    pub master: bool,
    /// A move tick has been processed since begin
    pub moved: bool,
}

impl ResizeDrag {
    /// Unclamped frame for an offset already multiplied by `scale`
    #[inline]
    pub fn frame_for(&self, offset: Vec2i) -> (Vec2i, Vec2i) {
        calculate_resize(self.mask, self.start_position, self.start_size, offset)
    }

    /// Apply the minimum size to a frame from [`ResizeDrag::frame_for`]
    #[inline]
    pub fn clamp(&self, pos: Vec2i, size: Vec2i, min_size: i32) -> (Vec2i, Vec2i) {
        clamp_resize(self.start_position, self.start_size, pos, size, min_size)
    }
}

/// Current gesture of a window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    /// Moving the window by its title bar
    Move {
        /// Pointer position at start (workspace coords)
        start_pointer: Vec2i,
        /// Window position at start
        start_position: Vec2i,
    },
    /// Resizing the window by an edge or corner
    Resize(ResizeDrag),
}

impl DragState {
    /// Check if this is a move gesture
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, DragState::Move { .. })
    }

    /// Check if this is a resize gesture
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, DragState::Resize(_))
    }

    /// Resize snapshot, if resizing
    #[inline]
    pub fn as_resize(&self) -> Option<&ResizeDrag> {
        match self {
            DragState::Resize(drag) => Some(drag),
            DragState::Move { .. } => None,
        }
    }
}
