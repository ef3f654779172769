//! Pointer events delivered by the host

use crate::math::Vec2i;

/// A pointer event in workspace coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub position: Vec2i,
    /// Host timestamp in milliseconds
    pub time_ms: f64,
    default_prevented: bool,
}

impl PointerEvent {
    pub fn new(x: i32, y: i32, time_ms: f64) -> Self {
        Self {
            position: Vec2i::new(x, y),
            time_ms,
            default_prevented: false,
        }
    }

    /// Ask the host to skip its default handling of this event
    #[inline]
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[inline]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
