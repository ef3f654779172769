//! Snap guide line shown while a gesture is locked onto an edge

use serde::{Deserialize, Serialize};
use crate::math::Axis;

/// Unique ruler identifier
pub type RulerId = u64;

/// Side of a panel a ruler belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    /// Left or top
    #[inline]
    pub fn near(axis: Axis) -> Side {
        match axis {
            Axis::X => Side::Left,
            Axis::Y => Side::Top,
        }
    }

    /// Right or bottom
    #[inline]
    pub fn far(axis: Axis) -> Side {
        match axis {
            Axis::X => Side::Right,
            Axis::Y => Side::Bottom,
        }
    }

    /// Axis the side's coordinate is measured on
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Side::Left | Side::Right => Axis::X,
            Side::Top | Side::Bottom => Axis::Y,
        }
    }

    #[inline]
    pub fn orientation(self) -> Orientation {
        match self.axis() {
            Axis::X => Orientation::Vertical,
            Axis::Y => Orientation::Horizontal,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
            Side::Top => 2,
            Side::Bottom => 3,
        }
    }
}

/// Direction a ruler line runs in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Line at a fixed x
    Vertical,
    /// Line at a fixed y
    Horizontal,
}

/// Transient guide line drawn along a snapped coordinate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruler {
    pub side: Side,
    pub orientation: Orientation,
    /// Coordinate in the owning container's space
    pub coordinate: i32,
    /// RGBA colour
    pub color: [u8; 4],
}

impl Ruler {
    /// Create a ruler for `side` at `coordinate`
    pub fn new(side: Side, coordinate: i32, color: [u8; 4]) -> Self {
        Self {
            side,
            orientation: side.orientation(),
            coordinate,
            color,
        }
    }

    #[inline]
    pub fn set_position(&mut self, coordinate: i32) {
        self.coordinate = coordinate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_orientation() {
        assert_eq!(Side::Left.orientation(), Orientation::Vertical);
        assert_eq!(Side::Right.orientation(), Orientation::Vertical);
        assert_eq!(Side::Top.orientation(), Orientation::Horizontal);
        assert_eq!(Side::Bottom.orientation(), Orientation::Horizontal);
    }

    #[test]
    fn test_side_near_far() {
        assert_eq!(Side::near(Axis::X), Side::Left);
        assert_eq!(Side::far(Axis::Y), Side::Bottom);
        assert_eq!(Side::Bottom.axis(), Axis::Y);
    }

    #[test]
    fn test_side_indices_are_distinct() {
        let mut seen = [false; 4];
        for side in Side::ALL {
            assert!(!seen[side.index()]);
            seen[side.index()] = true;
        }
    }

    #[test]
    fn test_ruler_set_position() {
        let mut ruler = Ruler::new(Side::Top, 40, [0, 0, 0, 255]);
        assert_eq!(ruler.orientation, Orientation::Horizontal);
        ruler.set_position(64);
        assert_eq!(ruler.coordinate, 64);
    }
}
