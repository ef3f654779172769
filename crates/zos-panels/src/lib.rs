//! Snapping Panel Workspace for Zero OS
//!
//! This crate provides the geometry and gesture core for dragging and
//! resizing panels that snap to each other:
//! - Edge and corner hit testing
//! - Move and resize gestures driven by pointer events
//! - Edge snapping with guide rulers
//! - Anchor islands: edge-connected panels that resize together
//! - A detach timer that frees a window from its island after a still hold
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2i`, `Mask`, `Aabb`, `SnapCode`)
//! - [`panel`]: Panels, container handles and rulers
//! - [`window`]: Window chrome, anchors and the `Resizable` capability
//! - [`container`]: The container contract and the `PanelManager` behind it
//! - [`input`]: Pointer events, drag snapshots and the input router
//!
//! ## Example
//!
//! ```rust
//! use zos_panels::{ContainerId, PointerEvent, Vec2i, WindowConfig, Workspace};
//!
//! let mut workspace = Workspace::new();
//! let left = workspace
//!     .add_window(
//!         WindowConfig {
//!             title: "Left".to_string(),
//!             position: Vec2i::new(0, 0),
//!             size: Vec2i::new(100, 100),
//!         },
//!         ContainerId::Root,
//!     )
//!     .unwrap();
//!
//! // Grab the right edge and drag it 20px outward
//! workspace.pointer_down(&mut PointerEvent::new(99, 50, 0.0));
//! workspace.pointer_move(&mut PointerEvent::new(119, 50, 16.0));
//! workspace.pointer_up(&mut PointerEvent::new(119, 50, 32.0));
//!
//! assert_eq!(workspace.panels.get(left).unwrap().size, Vec2i::new(120, 100));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: No platform dependencies; the host feeds pointer events in
//! 2. **Time Abstraction**: Timers run on injected timestamps for deterministic testing
//! 3. **Owned Panels**: The manager owns every panel; panels hold a plain container handle

pub mod math;
pub mod panel;
pub mod window;
pub mod container;
pub mod input;

mod config;
mod engine;
mod error;

// Re-export core types for convenience
pub use math::{Aabb, Axis, Mask, PanelStyle, SnapCode, SnapResult, Vec2i, PANEL_STYLE};
pub use panel::{ContainerId, Orientation, Panel, PanelId, Ruler, RulerId, Side};
pub use window::{Anchor, AnchorList, Resizable, Window, WindowConfig, WindowRegion};
pub use container::{Container, PanelManager, SnapQuery};
pub use input::{DragState, InputResult, InputRouter, PointerEvent, ResizeDrag};

pub use config::{WorkspaceConfig, DETACH_HOLD_MS};
pub use engine::{take_connected, DetachTimer, PanelFrame, Workspace};
pub use error::PanelError;
