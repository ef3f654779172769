//! Axis-aligned bounding box

use serde::{Deserialize, Serialize};
use super::Vec2i;

/// Axis-aligned box given by its min (top-left) and max (bottom-right) corners
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2i,
    pub max: Vec2i,
}

impl Aabb {
    /// Create from two arbitrary corners
    #[inline]
    pub fn from_corners(a: Vec2i, b: Vec2i) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create from position and size
    #[inline]
    pub fn from_pos_size(pos: Vec2i, size: Vec2i) -> Self {
        Self::from_corners(pos, pos + size)
    }

    /// Width and height
    #[inline]
    pub fn size(&self) -> Vec2i {
        self.max - self.min
    }

    /// Check if a point is inside (max edges exclusive)
    #[inline]
    pub fn contains(&self, p: Vec2i) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Check if two boxes overlap; boxes that merely touch count
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Grow outward by `border` on all sides
    #[inline]
    pub fn expand(&self, border: i32) -> Aabb {
        Aabb {
            min: self.min - Vec2i::splat(border),
            max: self.max + Vec2i::splat(border),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_corners_normalizes() {
        let b = Aabb::from_corners(Vec2i::new(10, 0), Vec2i::new(0, 20));
        assert_eq!(b.min, Vec2i::new(0, 0));
        assert_eq!(b.max, Vec2i::new(10, 20));
        assert_eq!(b.size(), Vec2i::new(10, 20));
    }

    #[test]
    fn test_aabb_contains() {
        let b = Aabb::from_pos_size(Vec2i::new(10, 20), Vec2i::new(100, 50));

        assert!(b.contains(Vec2i::new(50, 40)));
        assert!(b.contains(Vec2i::new(10, 20)));
        assert!(!b.contains(Vec2i::new(110, 40)));
        assert!(!b.contains(Vec2i::new(5, 40)));
    }

    #[test]
    fn test_aabb_intersects() {
        let a = Aabb::from_pos_size(Vec2i::new(0, 0), Vec2i::new(100, 100));
        let b = Aabb::from_pos_size(Vec2i::new(50, 50), Vec2i::new(100, 100));
        let c = Aabb::from_pos_size(Vec2i::new(200, 200), Vec2i::new(50, 50));
        let touching = Aabb::from_pos_size(Vec2i::new(100, 0), Vec2i::new(100, 100));

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(a.intersects(&touching));
    }

    #[test]
    fn test_aabb_expand_bridges_gap() {
        let a = Aabb::from_pos_size(Vec2i::new(0, 0), Vec2i::new(100, 100));
        let b = Aabb::from_pos_size(Vec2i::new(110, 0), Vec2i::new(100, 100));

        assert!(!a.intersects(&b));
        assert!(a.expand(5).intersects(&b.expand(5)));

        let expanded = a.expand(5);
        assert_eq!(expanded.min, Vec2i::new(-5, -5));
        assert_eq!(expanded.max, Vec2i::new(105, 105));
    }
}
