//! Snap query results

use bitflags::bitflags;
use super::{Axis, Vec2i};

bitflags! {
    /// Axes on which a moving edge locked onto a neighbouring edge
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SnapCode: u8 {
        const X = 0b01;
        const Y = 0b10;
    }
}

impl SnapCode {
    /// Flag for a single axis
    #[inline]
    pub fn for_axis(axis: Axis) -> SnapCode {
        match axis {
            Axis::X => SnapCode::X,
            Axis::Y => SnapCode::Y,
        }
    }

    #[inline]
    pub fn has(self, axis: Axis) -> bool {
        self.contains(SnapCode::for_axis(axis))
    }
}

/// Snap code together with the (partially) snapped reference point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapResult {
    pub code: SnapCode,
    pub point: Vec2i,
}

impl SnapResult {
    /// No snap; the reference point is returned unchanged
    #[inline]
    pub fn none(point: Vec2i) -> Self {
        Self {
            code: SnapCode::empty(),
            point,
        }
    }

    #[inline]
    pub fn is_snapped(&self) -> bool {
        !self.code.is_empty()
    }

    /// Snapped coordinate on `axis`, if that axis snapped
    #[inline]
    pub fn snapped(&self, axis: Axis) -> Option<i32> {
        self.code.has(axis).then(|| self.point.get(axis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_code_axes() {
        let code = SnapCode::X;
        assert!(code.has(Axis::X));
        assert!(!code.has(Axis::Y));
        assert!((SnapCode::X | SnapCode::Y).has(Axis::Y));
        assert_eq!(SnapCode::for_axis(Axis::Y), SnapCode::Y);
    }

    #[test]
    fn test_snap_result_none() {
        let result = SnapResult::none(Vec2i::new(3, 4));
        assert!(!result.is_snapped());
        assert_eq!(result.snapped(Axis::X), None);
        assert_eq!(result.point, Vec2i::new(3, 4));
    }

    #[test]
    fn test_snap_result_single_axis() {
        let result = SnapResult {
            code: SnapCode::Y,
            point: Vec2i::new(3, 40),
        };
        assert!(result.is_snapped());
        assert_eq!(result.snapped(Axis::X), None);
        assert_eq!(result.snapped(Axis::Y), Some(40));
    }
}
