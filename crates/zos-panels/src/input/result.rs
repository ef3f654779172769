//! Input result type

use serde::Serialize;
use crate::panel::PanelId;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// Pointer landed in a window body; forward to its content
    Forward {
        /// Target window
        panel_id: PanelId,
        /// X coordinate in window-local space
        local_x: i32,
        /// Y coordinate in window-local space
        local_y: i32,
    },
}
