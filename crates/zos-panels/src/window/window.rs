//! Window struct and per-window gesture state

use crate::input::DragState;
use crate::math::{Aabb, Axis, Mask, PanelStyle, Vec2i};
use crate::panel::{RulerId, Side};
use super::{AnchorList, WindowRegion};

/// One optional ruler handle per side
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RulerSlots([Option<RulerId>; 4]);

impl RulerSlots {
    #[inline]
    pub fn get(&self, side: Side) -> Option<RulerId> {
        self.0[side.index()]
    }

    #[inline]
    pub(crate) fn set(&mut self, side: Side, ruler: Option<RulerId>) {
        self.0[side.index()] = ruler;
    }

    /// Number of live rulers
    pub fn count(&self) -> usize {
        self.0.iter().filter(|r| r.is_some()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Empty every slot, returning the handles that were held
    pub(crate) fn take_all(&mut self) -> Vec<RulerId> {
        self.0.iter_mut().filter_map(Option::take).collect()
    }
}

/// Window chrome and gesture state carried by a window panel
#[derive(Clone, Debug)]
pub struct Window {
    /// Window title
    pub title: String,
    /// Width of the edge grab zones
    pub grab_zone_width: i32,
    pub title_bar_height: i32,
    /// Active gesture snapshot
    pub(crate) drag: Option<DragState>,
    /// Panels resizing in lock-step with this one; empty outside a resize
    pub(crate) anchors: AnchorList,
    pub(crate) rulers: RulerSlots,
    /// Serial of the running master resize, used to invalidate stale timers
    pub(crate) gesture: Option<u64>,
    next_gesture: u64,
}

impl Window {
    /// Create window chrome from the presentation style
    pub fn new(title: impl Into<String>, style: &PanelStyle) -> Self {
        Self {
            title: title.into(),
            grab_zone_width: style.grab_zone_width,
            title_bar_height: style.title_bar_height,
            drag: None,
            anchors: AnchorList::new(),
            rulers: RulerSlots::default(),
            gesture: None,
            next_gesture: 1,
        }
    }

    #[inline]
    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.drag.as_ref().is_some_and(DragState::is_move)
    }

    #[inline]
    pub fn is_resizing(&self) -> bool {
        self.drag.as_ref().is_some_and(DragState::is_resize)
    }

    #[inline]
    pub fn anchors(&self) -> &AnchorList {
        &self.anchors
    }

    #[inline]
    pub fn rulers(&self) -> &RulerSlots {
        &self.rulers
    }

    /// Start a new master gesture serial
    pub(crate) fn arm_gesture(&mut self) -> u64 {
        let serial = self.next_gesture;
        self.next_gesture += 1;
        self.gesture = Some(serial);
        serial
    }

    /// Grab-zone mask for a pointer in the container's space
    ///
    /// Per axis, the far edge wins over the near edge when the window is
    /// narrower than two grab zones.
    pub fn grab_mask(&self, pointer: Vec2i, top_left: Vec2i, bottom_right: Vec2i) -> Mask {
        let to_far = bottom_right - pointer;
        let to_near = pointer - top_left;
        let zone = 0..self.grab_zone_width;

        let mut mask = Vec2i::ZERO;
        for axis in Axis::BOTH {
            if zone.contains(&to_far.get(axis)) {
                mask.set(axis, 1);
            } else if zone.contains(&to_near.get(axis)) {
                mask.set(axis, -1);
            }
        }
        Mask::new(mask.x, mask.y)
    }

    /// Title bar box in the container's space
    pub fn title_bar(&self, position: Vec2i, size: Vec2i) -> Aabb {
        Aabb::from_pos_size(position, Vec2i::new(size.x, self.title_bar_height.min(size.y)))
    }

    /// Region under a pointer already known to be inside the window
    pub fn region_at(&self, pointer: Vec2i, position: Vec2i, size: Vec2i) -> WindowRegion {
        let mask = self.grab_mask(pointer, position, position + size);
        if !mask.is_none() {
            return WindowRegion::Resize(mask);
        }
        if self.title_bar(position, size).contains(pointer) {
            return WindowRegion::TitleBar;
        }
        WindowRegion::Content
    }
}
