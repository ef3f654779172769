//! Resize mask: which edges of a panel a gesture manipulates

use serde::{Deserialize, Serialize};
use super::{Axis, Vec2i};

/// Per-axis edge selector with components in {-1, 0, 1}
///
/// -1 selects the near edge (left/top), 1 the far edge (right/bottom) and
/// 0 leaves the axis alone. One nonzero axis is a side resize, two is a
/// corner resize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mask(Vec2i);

impl Mask {
    pub const NONE: Mask = Mask(Vec2i::ZERO);
    pub const LEFT: Mask = Mask(Vec2i::new(-1, 0));
    pub const RIGHT: Mask = Mask(Vec2i::new(1, 0));
    pub const TOP: Mask = Mask(Vec2i::new(0, -1));
    pub const BOTTOM: Mask = Mask(Vec2i::new(0, 1));
    pub const TOP_LEFT: Mask = Mask(Vec2i::new(-1, -1));
    pub const TOP_RIGHT: Mask = Mask(Vec2i::new(1, -1));
    pub const BOTTOM_LEFT: Mask = Mask(Vec2i::new(-1, 1));
    pub const BOTTOM_RIGHT: Mask = Mask(Vec2i::new(1, 1));

    /// Create a mask, reducing each component to its sign
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Mask(Vec2i::new(x.signum(), y.signum()))
    }

    /// Mask with only `axis` set
    #[inline]
    pub fn on_axis(axis: Axis, value: i32) -> Self {
        Mask(Vec2i::ZERO.with(axis, value.signum()))
    }

    #[inline]
    pub fn x(self) -> i32 {
        self.0.x
    }

    #[inline]
    pub fn y(self) -> i32 {
        self.0.y
    }

    #[inline]
    pub fn get(self, axis: Axis) -> i32 {
        self.0.get(axis)
    }

    /// The mask as a vector, for offset arithmetic
    #[inline]
    pub fn as_vec2(self) -> Vec2i {
        self.0
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == Vec2i::ZERO
    }

    /// Exactly one axis selected
    #[inline]
    pub fn is_side(self) -> bool {
        (self.0.x != 0) != (self.0.y != 0)
    }

    /// Both axes selected
    #[inline]
    pub fn is_corner(self) -> bool {
        self.0.x != 0 && self.0.y != 0
    }

    #[inline]
    pub fn has_positive(self) -> bool {
        self.0.x > 0 || self.0.y > 0
    }

    #[inline]
    pub fn has_negative(self) -> bool {
        self.0.x < 0 || self.0.y < 0
    }

    /// Far-edge part of the mask
    #[inline]
    pub fn positive(self) -> Mask {
        Mask(self.0.max0())
    }

    /// Near-edge part of the mask
    #[inline]
    pub fn negative(self) -> Mask {
        Mask(self.0.min0())
    }

    /// Near-edge components as a vector; these are the axes on which a
    /// resize also shifts the position
    #[inline]
    pub fn min0(self) -> Vec2i {
        self.0.min0()
    }

    /// Overlay `other` onto `self` on every axis `other` selects
    pub fn merge(self, other: Mask) -> Mask {
        let mut merged = self.0;
        for axis in Axis::BOTH {
            if other.get(axis) != 0 {
                merged.set(axis, other.get(axis));
            }
        }
        Mask(merged)
    }

    /// CSS cursor name for this edge combination
    pub fn cursor(self) -> &'static str {
        match (self.0.x, self.0.y) {
            (0, 0) => "default",
            (_, 0) => "ew-resize",
            (0, _) => "ns-resize",
            (x, y) if x == y => "nwse-resize",
            _ => "nesw-resize",
        }
    }
}
