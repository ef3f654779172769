//! Window region for hit testing

use crate::math::Mask;

/// Region of a window under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Title bar area (starts a move)
    TitleBar,
    /// Window body
    Content,
    /// Edge or corner grab zone (starts a resize)
    Resize(Mask),
}

impl WindowRegion {
    /// Check if this is a resize region
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, WindowRegion::Resize(_))
    }

    /// Check if this is a corner resize region
    #[inline]
    pub fn is_corner(&self) -> bool {
        matches!(self, WindowRegion::Resize(mask) if mask.is_corner())
    }

    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar => "move",
            WindowRegion::Content => "default",
            WindowRegion::Resize(mask) => mask.cursor(),
        }
    }
}
