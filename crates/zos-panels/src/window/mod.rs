//! Window module
//!
//! Windows are panels with a title bar and four edge/corner grab zones.
//! This module holds the per-window state: drag snapshot, anchor list and
//! ruler slots. The gestures that drive that state live in the engine.

#[allow(clippy::module_inception)]
mod window;
mod config;
mod region;
mod anchors;
mod resizable;

pub use window::{RulerSlots, Window};
pub use config::WindowConfig;
pub use region::WindowRegion;
pub use anchors::{Anchor, AnchorList};
pub use resizable::Resizable;
