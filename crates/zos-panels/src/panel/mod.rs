//! Panels and snap guide rulers
//!
//! A panel is the positionable, resizable base entity. Windows are panels
//! that additionally carry title bar chrome and resize state.

#[allow(clippy::module_inception)]
mod panel;
mod ruler;

pub use panel::{ContainerId, Panel};
pub use ruler::{Orientation, Ruler, RulerId, Side};

/// Unique panel identifier
pub type PanelId = u64;
