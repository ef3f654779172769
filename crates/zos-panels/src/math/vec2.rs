//! Integer 2D vector for positions, sizes and offsets

use serde::{Deserialize, Serialize};

/// One of the two layout axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Both axes, X first
    pub const BOTH: [Axis; 2] = [Axis::X, Axis::Y];
}

/// 2D integer vector for positions, sizes and pointer offsets
///
/// Arithmetic saturates at the `i32` bounds, so pointer coordinates far
/// outside the workspace cannot overflow a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    /// Zero vector
    pub const ZERO: Vec2i = Vec2i { x: 0, y: 0 };

    /// Unit vector on both axes
    pub const ONE: Vec2i = Vec2i { x: 1, y: 1 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Same value on both axes
    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self { x: v, y: v }
    }

    /// Component on `axis`
    #[inline]
    pub fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Overwrite the component on `axis`
    #[inline]
    pub fn set(&mut self, axis: Axis, value: i32) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }

    /// Copy of `self` with `axis` replaced
    #[inline]
    pub fn with(mut self, axis: Axis, value: i32) -> Self {
        self.set(axis, value);
        self
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Vec2i) -> Vec2i {
        Vec2i::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Vec2i) -> Vec2i {
        Vec2i::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Clamp every component to `<= 0`
    #[inline]
    pub fn min0(self) -> Vec2i {
        self.min(Vec2i::ZERO)
    }

    /// Clamp every component to `>= 0`
    #[inline]
    pub fn max0(self) -> Vec2i {
        self.max(Vec2i::ZERO)
    }

    /// Component-wise sign (-1, 0 or 1)
    #[inline]
    pub fn signum(self) -> Vec2i {
        Vec2i::new(self.x.signum(), self.y.signum())
    }
}

impl std::ops::Add for Vec2i {
    type Output = Vec2i;
    #[inline]
    fn add(self, other: Vec2i) -> Vec2i {
        Vec2i::new(self.x.saturating_add(other.x), self.y.saturating_add(other.y))
    }
}

impl std::ops::AddAssign for Vec2i {
    #[inline]
    fn add_assign(&mut self, other: Vec2i) {
        *self = *self + other;
    }
}

impl std::ops::Sub for Vec2i {
    type Output = Vec2i;
    #[inline]
    fn sub(self, other: Vec2i) -> Vec2i {
        Vec2i::new(self.x.saturating_sub(other.x), self.y.saturating_sub(other.y))
    }
}

impl std::ops::SubAssign for Vec2i {
    #[inline]
    fn sub_assign(&mut self, other: Vec2i) {
        *self = *self - other;
    }
}

/// Component-wise product
impl std::ops::Mul for Vec2i {
    type Output = Vec2i;
    #[inline]
    fn mul(self, other: Vec2i) -> Vec2i {
        Vec2i::new(self.x.saturating_mul(other.x), self.y.saturating_mul(other.y))
    }
}

impl std::ops::Mul<i32> for Vec2i {
    type Output = Vec2i;
    #[inline]
    fn mul(self, s: i32) -> Vec2i {
        Vec2i::new(self.x.saturating_mul(s), self.y.saturating_mul(s))
    }
}

impl std::ops::Neg for Vec2i {
    type Output = Vec2i;
    #[inline]
    fn neg(self) -> Vec2i {
        Vec2i::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}
