//! Core geometry types for the panel workspace
//!
//! Integer vectors, resize masks, bounding boxes and snap codes. Everything
//! here is plain data with no knowledge of panels or containers.

mod vec2;
mod mask;
mod aabb;
mod snap;
mod style;

pub use vec2::{Axis, Vec2i};
pub use mask::Mask;
pub use aabb::Aabb;
pub use snap::{SnapCode, SnapResult};
pub use style::{PanelStyle, PANEL_STYLE};
