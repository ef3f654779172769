//! Error types for the panel workspace

use thiserror::Error;
use crate::panel::{ContainerId, PanelId};

/// Errors from structural workspace operations
///
/// Gestures never fail; they degrade to no-ops instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("unknown panel: {0}")]
    UnknownPanel(PanelId),

    #[error("panel {0} is not a window")]
    NotAWindow(PanelId),

    #[error("cannot attach panel {panel} to {container:?}: it would contain itself")]
    ContainerCycle { panel: PanelId, container: ContainerId },

    #[error("invalid configuration: {0}")]
    Config(String),
}
