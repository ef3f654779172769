//! Edge/corner resize gesture
//!
//! The master window follows the pointer; every anchored panel runs the
//! same gesture as a slave, fed the master's offset within the same tick.

use tracing::{debug, trace};
use crate::container::{Container, SnapQuery};
use crate::input::ResizeDrag;
use crate::math::{Axis, Mask, Vec2i};
use crate::panel::{ContainerId, Panel, PanelId, Side};
use crate::window::Anchor;
use super::{DetachTimer, Workspace};

impl Workspace {
    /// Start resizing a window from a pointer position in workspace space
    ///
    /// The mask is hit-tested from the pointer when not given. Anchored
    /// panels begin alongside, and a detach timer is armed for `now_ms`.
    /// Returns false when the panel cannot resize or already runs a
    /// gesture.
    pub fn begin_resize(&mut self, id: PanelId, pointer: Vec2i, mask: Option<Mask>, now_ms: f64) -> bool {
        if self.input.is_subscribed(id) {
            return false;
        }
        let Some(panel) = self.panels.get(id) else {
            return false;
        };
        let Some(resizable) = panel.as_resizable() else {
            return false;
        };
        let mask = match mask {
            Some(mask) => mask,
            None => {
                let origin = self.panels.origin(panel.container().unwrap_or(ContainerId::Root));
                resizable.grab_mask(pointer - origin, panel.top_left(), panel.bottom_right())
            }
        };

        let anchors = self.collect_anchors(id, mask);
        self.start_sizing(id, pointer, mask, Vec2i::ONE, true);
        for anchor in anchors.iter() {
            self.begin_slave(*anchor, pointer);
        }

        let Some(panel) = self.panels.get_mut(id) else {
            return false;
        };
        if let Some(resizable) = panel.as_resizable_mut() {
            resizable.set_anchors(anchors);
        }
        let Some(window) = panel.window_mut() else {
            return false;
        };
        let gesture = window.arm_gesture();
        self.timers.push(DetachTimer {
            window: id,
            due_ms: now_ms + self.config.detach_hold_ms,
            gesture,
        });

        self.input.subscribe(id);
        self.cursor = mask.cursor();
        debug!(id, ?mask, gesture, "resize begin");
        true
    }

    /// Begin an anchored panel and, recursively, its own anchors
    fn begin_slave(&mut self, anchor: Anchor, pointer: Vec2i) {
        let already = self
            .panels
            .get(anchor.panel)
            .and_then(Panel::as_resizable)
            .map(|r| r.resize_drag().is_some());
        // Plain panels have no resize capability; panels already sizing
        // are part of this gesture
        if already != Some(false) {
            return;
        }

        self.start_sizing(anchor.panel, pointer, anchor.mask, anchor.scale, false);
        let nested = self
            .panels
            .get(anchor.panel)
            .and_then(Panel::as_resizable)
            .map(|r| r.anchors().clone())
            .unwrap_or_default();
        for next in nested {
            self.begin_slave(next, pointer);
        }
    }

    fn start_sizing(&mut self, id: PanelId, pointer: Vec2i, mask: Mask, scale: Vec2i, master: bool) {
        let Some(panel) = self.panels.get_mut(id) else {
            return;
        };
        let drag = ResizeDrag {
            start_pointer: pointer,
            start_position: panel.position,
            start_size: panel.size,
            mask,
            scale,
            master,
            moved: false,
        };
        if let Some(resizable) = panel.as_resizable_mut() {
            resizable.begin_resize(drag);
        }
    }

    /// Follow the pointer during a resize
    pub(crate) fn resize_tick(&mut self, id: PanelId, pointer: Vec2i) {
        let Some((drag, mut island)) = self.panels.get(id).and_then(Panel::as_resizable).and_then(|r| {
            r.resize_drag().map(|drag| (*drag, r.anchors().ids()))
        }) else {
            return;
        };
        island.push(id);

        let mut ticked = Vec::with_capacity(island.len());
        self.size_tick(id, pointer - drag.start_pointer, &island, &mut ticked);
        self.cursor = drag.mask.cursor();
        for pid in ticked {
            self.request_layout(pid);
        }
    }

    /// Apply an incoming offset to one panel of the island and forward the
    /// snap-adjusted offset to its anchors
    fn size_tick(&mut self, id: PanelId, incoming: Vec2i, island: &[PanelId], ticked: &mut Vec<PanelId>) {
        if ticked.contains(&id) {
            return;
        }
        let Some(panel) = self.panels.get_mut(id) else {
            return;
        };
        let container = panel.container();
        let Some(resizable) = panel.as_resizable_mut() else {
            return;
        };
        resizable.mark_moved();
        let Some(drag) = resizable.resize_drag().copied() else {
            return;
        };
        ticked.push(id);

        let mut offset = incoming * drag.scale;
        if let Some(container) = container {
            let (pos, size) = drag.frame_for(offset);
            if drag.mask.has_positive() {
                self.snap_edge(id, container, &drag, pos + size, drag.mask.positive(), island, &mut offset);
            }
            if drag.mask.has_negative() {
                self.snap_edge(id, container, &drag, pos, drag.mask.negative(), island, &mut offset);
            }
        }

        let (pos, size) = drag.frame_for(offset);
        let (pos, size) = drag.clamp(pos, size, self.config.style.min_size);
        let anchors = match self.panels.get_mut(id) {
            Some(panel) => {
                panel.position = pos;
                panel.size = size;
                panel.as_resizable().map(|r| r.anchors().clone()).unwrap_or_default()
            }
            None => return,
        };

        for anchor in anchors {
            self.size_tick(anchor.panel, offset, island, ticked);
        }
    }

    /// Snap one moving corner and fold the snap delta into `offset`
    ///
    /// The master also shows or hides the rulers for the sides `direction`
    /// selects.
    #[allow(clippy::too_many_arguments)]
    fn snap_edge(
        &mut self,
        id: PanelId,
        container: ContainerId,
        drag: &ResizeDrag,
        corner: Vec2i,
        direction: Mask,
        island: &[PanelId],
        offset: &mut Vec2i,
    ) {
        let hit = self.panels.snap_controls(
            container,
            &SnapQuery::new(corner, direction, island).with_scale(drag.scale),
            None,
        );

        for axis in Axis::BOTH {
            let side = match direction.get(axis) {
                0 => continue,
                d if d > 0 => Side::far(axis),
                _ => Side::near(axis),
            };
            let snapped = hit.snapped(axis);
            if let Some(c) = snapped {
                trace!(id, ?side, coordinate = c, "resize snap");
                offset.set(axis, offset.get(axis).saturating_add(c.saturating_sub(corner.get(axis))));
            }
            if drag.master {
                self.update_ruler(id, side, snapped);
            }
        }
    }

    /// Leave a master resize, ending every anchored panel with it
    pub fn end_resize(&mut self, id: PanelId) {
        self.finish_sizing(id);
        self.timers.retain(|t| t.window != id);
        if self.input.unsubscribe(id) {
            self.cursor = "default";
        }
        debug!(id, "resize end");
    }

    /// End a panel's resize and, recursively, its anchors'
    pub(crate) fn finish_sizing(&mut self, id: PanelId) {
        let anchors = match self.panels.get_mut(id).and_then(Panel::as_resizable_mut) {
            Some(resizable) => resizable.end_resize(),
            None => return,
        };
        self.remove_rulers(id);
        for anchor in anchors {
            self.finish_sizing(anchor.panel);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::Workspace;
    use crate::math::{Mask, Vec2i};
    use crate::panel::{ContainerId, PanelId, Side};
    use crate::window::WindowConfig;

    fn add(ws: &mut Workspace, x: i32, y: i32, w: i32, h: i32, container: ContainerId) -> PanelId {
        ws.add_window(
            WindowConfig {
                title: "Test".to_string(),
                position: Vec2i::new(x, y),
                size: Vec2i::new(w, h),
            },
            container,
        )
        .unwrap()
    }

    fn frame(ws: &Workspace, id: PanelId) -> (Vec2i, Vec2i) {
        let panel = ws.panels.get(id).unwrap();
        (panel.position, panel.size)
    }

    #[test]
    fn test_resize_right_edge() {
        let mut ws = Workspace::new();
        let id = add(&mut ws, 0, 0, 100, 100, ContainerId::Root);

        assert!(ws.begin_resize(id, Vec2i::new(99, 50), None, 0.0));
        assert_eq!(ws.cursor(), "ew-resize");
        ws.resize_tick(id, Vec2i::new(119, 80));
        assert_eq!(frame(&ws, id), (Vec2i::ZERO, Vec2i::new(120, 100)));
    }

    #[test]
    fn test_resize_top_left_corner_moves_position() {
        let mut ws = Workspace::new();
        let id = add(&mut ws, 100, 100, 200, 200, ContainerId::Root);

        ws.begin_resize(id, Vec2i::new(101, 101), None, 0.0);
        ws.resize_tick(id, Vec2i::new(71, 131));
        assert_eq!(frame(&ws, id), (Vec2i::new(70, 130), Vec2i::new(230, 170)));
    }

    #[test]
    fn test_resize_clamps_to_min_size() {
        let mut ws = Workspace::new();
        let id = add(&mut ws, 100, 0, 100, 100, ContainerId::Root);

        ws.begin_resize(id, Vec2i::new(101, 50), None, 0.0);
        ws.resize_tick(id, Vec2i::new(400, 50));
        assert_eq!(frame(&ws, id), (Vec2i::new(150, 0), Vec2i::new(50, 100)));
    }

    #[test]
    fn test_resize_none_mask_is_noop() {
        let mut ws = Workspace::new();
        let id = add(&mut ws, 0, 0, 100, 100, ContainerId::Root);

        ws.begin_resize(id, Vec2i::new(50, 50), Some(Mask::NONE), 0.0);
        ws.resize_tick(id, Vec2i::new(90, 10));
        assert_eq!(frame(&ws, id), (Vec2i::ZERO, Vec2i::splat(100)));
    }

    #[test]
    fn test_resize_propagates_to_neighbour() {
        let mut ws = Workspace::new();
        let w1 = add(&mut ws, 0, 0, 100, 100, ContainerId::Root);
        let w2 = add(&mut ws, 100, 0, 100, 100, ContainerId::Root);

        ws.begin_resize(w1, Vec2i::new(99, 50), None, 0.0);
        assert!(ws.panels.get(w2).unwrap().window().unwrap().is_resizing());

        ws.resize_tick(w1, Vec2i::new(104, 50));
        assert_eq!(frame(&ws, w1), (Vec2i::ZERO, Vec2i::new(105, 100)));
        assert_eq!(frame(&ws, w2), (Vec2i::new(105, 0), Vec2i::new(95, 100)));
    }

    #[test]
    fn test_begin_resize_installs_master_anchors() {
        let mut ws = Workspace::new();
        let w1 = add(&mut ws, 0, 0, 100, 100, ContainerId::Root);
        let w2 = add(&mut ws, 100, 0, 100, 100, ContainerId::Root);

        ws.begin_resize(w1, Vec2i::new(99, 50), None, 0.0);
        let master = ws.panels.get(w1).and_then(|p| p.as_resizable()).unwrap();
        let anchor = master.anchors().get(w2).unwrap();
        assert_eq!(anchor.mask, Mask::LEFT);
        assert_eq!(anchor.scale, Vec2i::ONE);
        assert_eq!(ws.pending_timers().len(), 1);
    }

    #[test]
    fn test_resize_snaps_to_edge_and_shows_ruler() {
        let mut ws = Workspace::new();
        let id = add(&mut ws, 0, 0, 100, 100, ContainerId::Root);
        add(&mut ws, 200, 300, 100, 100, ContainerId::Root);

        ws.begin_resize(id, Vec2i::new(99, 50), None, 0.0);
        ws.resize_tick(id, Vec2i::new(194, 50));
        assert_eq!(frame(&ws, id).1, Vec2i::new(200, 100));

        let window = ws.panels.get(id).unwrap().window().unwrap();
        let ruler = window.rulers().get(Side::Right).unwrap();
        assert_eq!(ws.panels.ruler(ruler).map(|r| r.coordinate), Some(200));
    }

    #[test]
    fn test_resize_children_follow_far_edge() {
        let mut ws = Workspace::new();
        let parent = add(&mut ws, 0, 0, 300, 300, ContainerId::Root);
        let child = add(&mut ws, 200, 200, 100, 100, ContainerId::Panel(parent));

        ws.begin_resize(parent, Vec2i::new(299, 299), None, 0.0);
        ws.resize_tick(parent, Vec2i::new(329, 319));
        assert_eq!(frame(&ws, parent).1, Vec2i::new(330, 320));
        assert_eq!(frame(&ws, child), (Vec2i::new(200, 200), Vec2i::new(130, 120)));
    }

    #[test]
    fn test_resize_children_keep_far_edge_on_near_drag() {
        let mut ws = Workspace::new();
        let parent = add(&mut ws, 100, 100, 300, 300, ContainerId::Root);
        let child = add(&mut ws, 0, 0, 100, 100, ContainerId::Panel(parent));

        ws.begin_resize(parent, Vec2i::new(101, 250), None, 0.0);
        ws.resize_tick(parent, Vec2i::new(81, 250));
        assert_eq!(frame(&ws, parent), (Vec2i::new(80, 100), Vec2i::new(320, 300)));
        // Child grows so its absolute right edge stays at x = 200
        assert_eq!(frame(&ws, child), (Vec2i::ZERO, Vec2i::new(120, 100)));
    }

    #[test]
    fn test_end_resize_clears_island() {
        let mut ws = Workspace::new();
        let w1 = add(&mut ws, 0, 0, 100, 100, ContainerId::Root);
        let w2 = add(&mut ws, 100, 0, 100, 100, ContainerId::Root);
        add(&mut ws, 300, 300, 100, 100, ContainerId::Root);

        ws.begin_resize(w1, Vec2i::new(99, 50), None, 0.0);
        ws.resize_tick(w1, Vec2i::new(100, 50));
        ws.end_resize(w1);

        for id in [w1, w2] {
            let window = ws.panels.get(id).unwrap().window().unwrap();
            assert!(window.anchors().is_empty());
            assert!(window.rulers().is_empty());
            assert!(!window.is_resizing());
        }
        assert_eq!(ws.panels.ruler_count(), 0);
        assert!(!ws.input.is_dragging());
        assert_eq!(ws.cursor(), "default");
    }

    #[test]
    fn test_plain_panel_anchor_is_skipped() {
        let mut ws = Workspace::new();
        let w1 = add(&mut ws, 0, 0, 100, 100, ContainerId::Root);
        let plain = ws.add_panel(Vec2i::new(100, 0), Vec2i::splat(100), ContainerId::Root).unwrap();

        ws.begin_resize(w1, Vec2i::new(99, 50), None, 0.0);
        ws.resize_tick(w1, Vec2i::new(104, 50));
        assert_eq!(frame(&ws, w1).1, Vec2i::new(105, 100));
        assert_eq!(frame(&ws, plain), (Vec2i::new(100, 0), Vec2i::splat(100)));
    }

    #[test]
    fn test_resize_requests_layout_once_per_container() {
        let mut ws = Workspace::new();
        let w1 = add(&mut ws, 0, 0, 100, 100, ContainerId::Root);
        add(&mut ws, 100, 0, 100, 100, ContainerId::Root);
        ws.panels.take_layout_requests();

        ws.begin_resize(w1, Vec2i::new(99, 50), None, 0.0);
        ws.resize_tick(w1, Vec2i::new(110, 50));
        assert_eq!(ws.panels.take_layout_requests(), vec![ContainerId::Root]);
    }
}
