//! Input routing module
//!
//! Drag snapshots, pointer events and the subscription context that
//! delivers workspace-wide pointer move/up to active gestures.

mod router;
mod drag;
mod result;
mod pointer;

pub use router::InputRouter;
pub use drag::{DragState, ResizeDrag};
pub use result::InputResult;
pub use pointer::PointerEvent;

use crate::math::{Mask, Vec2i};

/// Calculate new position and size after a resize by `offset`
///
/// Far edges (mask > 0) only grow the size; near edges (mask < 0) also
/// shift the position so the opposite edge stays put.
pub fn calculate_resize(mask: Mask, start_pos: Vec2i, start_size: Vec2i, offset: Vec2i) -> (Vec2i, Vec2i) {
    let size = start_size + offset * mask.as_vec2();
    let pos = start_pos - offset * mask.min0();
    (pos, size)
}

/// Enforce the minimum size, keeping the far corner of the start frame
/// fixed when the near edge is clamped
pub fn clamp_resize(
    start_pos: Vec2i,
    start_size: Vec2i,
    pos: Vec2i,
    size: Vec2i,
    min_size: i32,
) -> (Vec2i, Vec2i) {
    let min = Vec2i::splat(min_size);
    let size = size.max(min);
    let pos = pos.min(start_pos + start_size - min);
    (pos, size)
}
