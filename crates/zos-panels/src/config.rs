//! Workspace configuration

use serde::{Deserialize, Serialize};
use crate::error::PanelError;
use crate::math::PanelStyle;

/// Default hold time before a motionless resize drops its anchors
pub const DETACH_HOLD_MS: f64 = 1000.0;

/// Configuration for a [`crate::Workspace`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Presentation settings shared by every panel
    pub style: PanelStyle,
    /// How long a resize handle must be held still before the window
    /// detaches from its anchors
    pub detach_hold_ms: f64,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            style: PanelStyle::default(),
            detach_hold_ms: DETACH_HOLD_MS,
        }
    }
}

impl WorkspaceConfig {
    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, PanelError> {
        let config: WorkspaceConfig =
            serde_json::from_str(json).map_err(|e| PanelError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the gesture engine cannot work with
    pub fn validate(&self) -> Result<(), PanelError> {
        if self.style.min_size < 1 {
            return Err(PanelError::Config(format!(
                "min_size must be positive, got {}",
                self.style.min_size
            )));
        }
        if self.style.grab_zone_width < 0 || self.style.snap_border < 0 {
            return Err(PanelError::Config(
                "grab_zone_width and snap_border must not be negative".to_string(),
            ));
        }
        if self.detach_hold_ms.is_nan() || self.detach_hold_ms < 0.0 {
            return Err(PanelError::Config(format!(
                "detach_hold_ms must be a non-negative number, got {}",
                self.detach_hold_ms
            )));
        }
        Ok(())
    }
}
