//! Resize capability shared by panel variants that can follow a gesture

use crate::input::{DragState, ResizeDrag};
use crate::math::{Mask, Vec2i};
use super::{AnchorList, Window};

/// Capability of taking part in a resize gesture, as master or anchor
///
/// Anchor propagation goes through this trait; panels without it are
/// skipped.
pub trait Resizable {
    /// Grab-zone mask for a pointer in the container's space
    fn grab_mask(&self, pointer: Vec2i, top_left: Vec2i, bottom_right: Vec2i) -> Mask;

    /// Record the snapshot for a new resize
    fn begin_resize(&mut self, drag: ResizeDrag);

    /// Current resize snapshot, if resizing
    fn resize_drag(&self) -> Option<&ResizeDrag>;

    /// Note that a move tick reached this panel
    fn mark_moved(&mut self);

    fn anchors(&self) -> &AnchorList;

    fn set_anchors(&mut self, anchors: AnchorList);

    /// Empty the anchor list, returning what it held
    fn take_anchors(&mut self) -> AnchorList;

    /// Leave the resize, returning the anchors that still need ending
    fn end_resize(&mut self) -> AnchorList;
}

impl Resizable for Window {
    fn grab_mask(&self, pointer: Vec2i, top_left: Vec2i, bottom_right: Vec2i) -> Mask {
        Window::grab_mask(self, pointer, top_left, bottom_right)
    }

    fn begin_resize(&mut self, drag: ResizeDrag) {
        self.drag = Some(DragState::Resize(drag));
    }

    fn resize_drag(&self) -> Option<&ResizeDrag> {
        self.drag.as_ref().and_then(DragState::as_resize)
    }

    fn mark_moved(&mut self) {
        if let Some(DragState::Resize(drag)) = self.drag.as_mut() {
            drag.moved = true;
        }
    }

    fn anchors(&self) -> &AnchorList {
        &self.anchors
    }

    fn set_anchors(&mut self, anchors: AnchorList) {
        self.anchors = anchors;
    }

    fn take_anchors(&mut self) -> AnchorList {
        std::mem::take(&mut self.anchors)
    }

    fn end_resize(&mut self) -> AnchorList {
        if self.is_resizing() {
            self.drag = None;
        }
        self.gesture = None;
        self.take_anchors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PANEL_STYLE;
    use crate::window::Anchor;

    fn drag() -> ResizeDrag {
        ResizeDrag {
            start_pointer: Vec2i::ZERO,
            start_position: Vec2i::ZERO,
            start_size: Vec2i::splat(100),
            mask: Mask::RIGHT,
            scale: Vec2i::ONE,
            master: true,
            moved: false,
        }
    }

    #[test]
    fn test_window_resize_lifecycle() {
        let mut window = Window::new("Test", &PANEL_STYLE);
        let resizable: &mut dyn Resizable = &mut window;

        resizable.begin_resize(drag());
        assert!(resizable.resize_drag().is_some());
        assert!(!resizable.resize_drag().unwrap().moved);

        resizable.mark_moved();
        assert!(resizable.resize_drag().unwrap().moved);

        let mut anchors = AnchorList::new();
        anchors.push(Anchor::new(2, Mask::LEFT, Vec2i::ONE));
        resizable.set_anchors(anchors);
        assert_eq!(resizable.anchors().len(), 1);

        let remaining = resizable.end_resize();
        assert_eq!(remaining.ids(), vec![2]);
        assert!(resizable.resize_drag().is_none());
        assert!(resizable.anchors().is_empty());
    }

    #[test]
    fn test_end_resize_leaves_move_alone() {
        let mut window = Window::new("Test", &PANEL_STYLE);
        window.drag = Some(DragState::Move {
            start_pointer: Vec2i::ZERO,
            start_position: Vec2i::ZERO,
        });
        Resizable::end_resize(&mut window);
        assert!(window.is_moving());
    }
}
