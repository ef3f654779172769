//! Presentation constants shared by every panel

use serde::{Deserialize, Serialize};

/// Presentation settings for panel chrome and snapping
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelStyle {
    /// Width of the edge band that starts a resize instead of a move
    pub grab_zone_width: i32,
    pub title_bar_height: i32,
    /// Smallest width and height a panel can be resized to
    pub min_size: i32,
    /// Distance within which edges snap and panels count as connected
    pub snap_border: i32,
    /// RGBA colour of snap guide lines
    pub ruler_color: [u8; 4],
}

/// Default style matching the desktop frame
pub const PANEL_STYLE: PanelStyle = PanelStyle {
    grab_zone_width: 6,
    title_bar_height: 22,
    min_size: 50,
    snap_border: 8,
    ruler_color: [255, 128, 0, 255],
};

impl Default for PanelStyle {
    fn default() -> Self {
        PANEL_STYLE
    }
}
