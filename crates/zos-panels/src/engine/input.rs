//! Input handling for pointer events and gesture dispatch

use crate::input::{DragState, InputResult, PointerEvent};
use crate::math::Vec2i;
use crate::panel::{ContainerId, PanelId};
use crate::window::WindowRegion;
use super::Workspace;

impl Workspace {
    /// Handle pointer down
    ///
    /// Grab zones start a resize, title bars start a move, and window
    /// bodies forward the pointer in window-local coordinates.
    pub fn pointer_down(&mut self, event: &mut PointerEvent) -> InputResult {
        self.advance(event.time_ms);

        let pos = event.position;
        let Some((id, region)) = self.hit_test(pos) else {
            return InputResult::Unhandled;
        };

        let result = match region {
            WindowRegion::Resize(mask) => {
                if self.begin_resize(id, pos, Some(mask), event.time_ms) {
                    InputResult::Handled
                } else {
                    InputResult::Unhandled
                }
            }
            WindowRegion::TitleBar => {
                if self.begin_move(id, pos) {
                    InputResult::Handled
                } else {
                    InputResult::Unhandled
                }
            }
            WindowRegion::Content => {
                let local = pos - self.panels.origin(ContainerId::Panel(id));
                InputResult::Forward {
                    panel_id: id,
                    local_x: local.x,
                    local_y: local.y,
                }
            }
        };

        if result == InputResult::Handled {
            event.prevent_default();
        }
        result
    }

    /// Handle pointer move
    pub fn pointer_move(&mut self, event: &mut PointerEvent) -> InputResult {
        self.advance(event.time_ms);
        if !self.input.is_dragging() {
            return InputResult::Unhandled;
        }

        for id in self.input.subscribers().to_vec() {
            match self.drag_of(id) {
                Some(DragState::Move { .. }) => self.move_tick(id, event.position),
                Some(DragState::Resize(_)) => self.resize_tick(id, event.position),
                None => {}
            }
        }
        event.prevent_default();
        InputResult::Handled
    }

    /// Handle pointer up
    pub fn pointer_up(&mut self, event: &mut PointerEvent) -> InputResult {
        self.advance(event.time_ms);
        if !self.input.is_dragging() {
            return InputResult::Unhandled;
        }

        for id in self.input.subscribers().to_vec() {
            match self.drag_of(id) {
                Some(DragState::Move { .. }) => self.end_move(id),
                _ => self.end_resize(id),
            }
        }
        event.prevent_default();
        InputResult::Handled
    }

    /// Cursor affordance for a hovering pointer
    pub fn cursor_at(&self, position: Vec2i) -> &'static str {
        match self.hit_test(position) {
            Some((_, region)) => region.cursor(),
            None => "default",
        }
    }

    /// Top-most window under a workspace position and the region hit
    pub fn hit_test(&self, position: Vec2i) -> Option<(PanelId, WindowRegion)> {
        self.hit_in(ContainerId::Root, position)
    }

    fn hit_in(&self, container: ContainerId, local: Vec2i) -> Option<(PanelId, WindowRegion)> {
        for &id in self.panels.members(container).iter().rev() {
            let Some(panel) = self.panels.get(id) else {
                continue;
            };
            if !panel.aabb().contains(local) {
                continue;
            }
            // Plain panels are inert; the window beneath them sees its body
            let window = panel.window()?;

            let region = window.region_at(local, panel.position, panel.size);
            if region == WindowRegion::Content {
                if let Some(hit) = self.hit_in(ContainerId::Panel(id), local - panel.position) {
                    return Some(hit);
                }
            }
            return Some((id, region));
        }
        None
    }

    fn drag_of(&self, id: PanelId) -> Option<DragState> {
        self.panels.get(id)?.window()?.drag().copied()
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::Workspace;
    use crate::input::{InputResult, PointerEvent};
    use crate::math::{Mask, Vec2i};
    use crate::panel::{ContainerId, PanelId};
    use crate::window::{WindowConfig, WindowRegion};

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

    #[test]
    fn test_hit_test_top_most() {
        let mut ws = Workspace::new();
        add(&mut ws, 0, 0, 200, 200, ContainerId::Root);
        let top = add(&mut ws, 50, 50, 200, 200, ContainerId::Root);

        assert_eq!(ws.hit_test(Vec2i::new(100, 100)), Some((top, WindowRegion::Content)));
        assert_eq!(ws.hit_test(Vec2i::new(500, 500)), None);
    }

    #[test]
    fn test_hit_test_descends_into_body() {
        let mut ws = Workspace::new();
        let outer = add(&mut ws, 100, 100, 400, 400, ContainerId::Root);
        let inner = add(&mut ws, 50, 50, 100, 100, ContainerId::Panel(outer));

        // Inner title bar at workspace (150..250, 150..172)
        assert_eq!(ws.hit_test(Vec2i::new(200, 160)), Some((inner, WindowRegion::TitleBar)));
        // Outer's own title bar is not a body hit
        assert_eq!(ws.hit_test(Vec2i::new(200, 110)), Some((outer, WindowRegion::TitleBar)));
    }

    #[test]
    fn test_hit_test_plain_panel_shields_body() {
        let mut ws = Workspace::new();
        let outer = add(&mut ws, 0, 0, 400, 400, ContainerId::Root);
        ws.add_panel(Vec2i::new(50, 50), Vec2i::splat(100), ContainerId::Panel(outer)).unwrap();

        assert_eq!(ws.hit_test(Vec2i::new(100, 100)), Some((outer, WindowRegion::Content)));
    }

    #[test]
    fn test_pointer_down_title_starts_move() {
        let mut ws = Workspace::new();
        let id = add(&mut ws, 0, 0, 200, 200, ContainerId::Root);

        let mut down = PointerEvent::new(100, 10, 0.0);
        assert_eq!(ws.pointer_down(&mut down), InputResult::Handled);
        assert!(down.default_prevented());
        assert!(ws.panels.get(id).unwrap().window().unwrap().is_moving());

        let mut up = PointerEvent::new(100, 10, 10.0);
        assert_eq!(ws.pointer_up(&mut up), InputResult::Handled);
        assert!(!ws.input.is_dragging());
    }

    #[test]
    fn test_pointer_down_edge_starts_resize() {
        let mut ws = Workspace::new();
        let id = add(&mut ws, 0, 0, 200, 200, ContainerId::Root);

        let mut down = PointerEvent::new(198, 100, 0.0);
        assert_eq!(ws.pointer_down(&mut down), InputResult::Handled);
        let window = ws.panels.get(id).unwrap().window().unwrap();
        assert_eq!(window.drag().and_then(|d| d.as_resize()).map(|d| d.mask), Some(Mask::RIGHT));
        assert_eq!(ws.cursor(), "ew-resize");
    }

    #[test]
    fn test_pointer_down_during_gesture_is_unhandled() {
        let mut ws = Workspace::new();
        let id = add(&mut ws, 0, 0, 200, 200, ContainerId::Root);
        assert!(ws.begin_move(id, Vec2i::new(100, 10)));

        // A second press on the same window starts nothing
        let mut edge = PointerEvent::new(198, 100, 5.0);
        assert_eq!(ws.pointer_down(&mut edge), InputResult::Unhandled);
        assert!(!edge.default_prevented());

        let mut title = PointerEvent::new(100, 10, 6.0);
        assert_eq!(ws.pointer_down(&mut title), InputResult::Unhandled);
        assert!(!title.default_prevented());

        let window = ws.panels.get(id).unwrap().window().unwrap();
        assert!(window.is_moving());
        assert!(ws.pending_timers().is_empty());
    }

    #[test]
    fn test_pointer_down_body_forwards() {
        let mut ws = Workspace::new();
        let id = add(&mut ws, 100, 100, 200, 200, ContainerId::Root);

        let mut down = PointerEvent::new(150, 200, 0.0);
        let result = ws.pointer_down(&mut down);
        assert_eq!(
            result,
            InputResult::Forward {
                panel_id: id,
                local_x: 50,
                local_y: 100
            }
        );
        assert!(!down.default_prevented());
        assert!(!ws.input.is_dragging());
    }

    #[test]
    fn test_pointer_move_without_gesture() {
        let mut ws = Workspace::new();
        add(&mut ws, 0, 0, 200, 200, ContainerId::Root);

        let mut event = PointerEvent::new(50, 50, 0.0);
        assert_eq!(ws.pointer_move(&mut event), InputResult::Unhandled);
        assert!(!event.default_prevented());
        assert_eq!(ws.pointer_up(&mut event), InputResult::Unhandled);
    }

    #[test]
    fn test_cursor_at() {
        let mut ws = Workspace::new();
        add(&mut ws, 0, 0, 200, 200, ContainerId::Root);

        assert_eq!(ws.cursor_at(Vec2i::new(1, 1)), "nwse-resize");
        assert_eq!(ws.cursor_at(Vec2i::new(198, 1)), "nesw-resize");
        assert_eq!(ws.cursor_at(Vec2i::new(100, 10)), "move");
        assert_eq!(ws.cursor_at(Vec2i::new(100, 100)), "default");
        assert_eq!(ws.cursor_at(Vec2i::new(300, 300)), "default");
    }
}
