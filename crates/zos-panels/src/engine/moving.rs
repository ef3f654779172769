//! Title bar move gesture

use tracing::debug;
use crate::container::{Container, SnapQuery};
use crate::input::DragState;
use crate::math::{Axis, Mask, Vec2i};
use crate::panel::{PanelId, Side};
use super::Workspace;

impl Workspace {
    /// Start moving a window from a pointer position in workspace space
    ///
    /// Existing snap lines are previewed immediately. Returns false when
    /// the panel is not a window or already runs a gesture.
    pub fn begin_move(&mut self, id: PanelId, pointer: Vec2i) -> bool {
        if self.input.is_subscribed(id) {
            return false;
        }
        let Some(panel) = self.panels.get_mut(id) else {
            return false;
        };
        let start_position = panel.position;
        let Some(window) = panel.window_mut() else {
            return false;
        };
        window.drag = Some(DragState::Move {
            start_pointer: pointer,
            start_position,
        });

        self.snap_move(id, start_position);
        self.input.subscribe(id);
        self.cursor = "move";
        debug!(id, ?start_position, "move begin");
        true
    }

    /// Follow the pointer during a move
    pub(crate) fn move_tick(&mut self, id: PanelId, pointer: Vec2i) {
        let Some(DragState::Move { start_pointer, start_position }) =
            self.panels.get(id).and_then(|p| p.window()).and_then(|w| w.drag().copied())
        else {
            return;
        };

        let position = self.snap_move(id, start_position + (pointer - start_pointer));
        if let Some(panel) = self.panels.get_mut(id) {
            panel.position = position;
        }
        self.request_layout(id);
    }

    /// Leave the move gesture
    pub fn end_move(&mut self, id: PanelId) {
        if let Some(window) = self.panels.get_mut(id).and_then(|p| p.window_mut()) {
            if window.is_moving() {
                window.drag = None;
            }
        }
        self.remove_rulers(id);
        if self.input.unsubscribe(id) {
            self.cursor = "default";
        }
        debug!(id, "move end");
    }

    /// Snap a proposed position against the window's siblings and update
    /// its rulers
    ///
    /// A top/left hit overrides the position directly; a bottom/right hit
    /// places the far edge on the snapped coordinate. The near edge wins
    /// when both hit on one axis.
    fn snap_move(&mut self, id: PanelId, position: Vec2i) -> Vec2i {
        let Some(panel) = self.panels.get(id) else {
            return position;
        };
        let Some(container) = panel.container() else {
            return position;
        };
        let size = panel.size;

        let exclude = [id];
        let near = self.panels.snap_controls(
            container,
            &SnapQuery::new(position, Mask::TOP_LEFT, &exclude),
            None,
        );
        let far = self.panels.snap_controls(
            container,
            &SnapQuery::new(position + size, Mask::BOTTOM_RIGHT, &exclude),
            None,
        );

        let mut snapped = position;
        for axis in Axis::BOTH {
            let near_hit = near.snapped(axis);
            let far_hit = far.snapped(axis);
            match (near_hit, far_hit) {
                (Some(c), _) => snapped.set(axis, c),
                (None, Some(c)) => snapped.set(axis, c.saturating_sub(size.get(axis))),
                (None, None) => {}
            }
            self.update_ruler(id, Side::near(axis), near_hit);
            self.update_ruler(id, Side::far(axis), far_hit);
        }
        snapped
    }
}
