//! Window configuration for creation

use crate::math::Vec2i;

/// Configuration for creating a window
#[derive(Clone, Debug, Default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial position in the target container's space
    pub position: Vec2i,
    /// Initial size (raised to the style's minimum)
    pub size: Vec2i,
}
