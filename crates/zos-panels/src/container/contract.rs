//! Query interface the gesture engine consumes from a container

use crate::math::{Mask, SnapResult, Vec2i};
use crate::panel::{ContainerId, PanelId, Ruler, RulerId};
use crate::window::AnchorList;

/// A snap query for one moving corner
#[derive(Clone, Copy, Debug)]
pub struct SnapQuery<'a> {
    /// Corner being moved, in the container's space
    pub point: Vec2i,
    /// Axes to search on; the sign tells which side of the panel moves
    pub direction: Mask,
    /// Panels that must not be snapped to
    pub exclude: &'a [PanelId],
    /// Scale recorded on anchors discovered by the query
    pub scale: Vec2i,
}

impl<'a> SnapQuery<'a> {
    pub fn new(point: Vec2i, direction: Mask, exclude: &'a [PanelId]) -> Self {
        Self {
            point,
            direction,
            exclude,
            scale: Vec2i::ONE,
        }
    }

    pub fn with_scale(mut self, scale: Vec2i) -> Self {
        self.scale = scale;
        self
    }
}

/// Container operations used by move and resize gestures
pub trait Container {
    /// Find the nearest edge within the snap border on each axis of the
    /// query's direction. When `anchors` is given, every panel with an edge
    /// on the reference line is appended to it.
    fn snap_controls(
        &self,
        container: ContainerId,
        query: &SnapQuery<'_>,
        anchors: Option<&mut AnchorList>,
    ) -> SnapResult;

    /// Snap and connection tolerance
    fn snap_border(&self) -> i32;

    /// Add a ruler to a container's render set
    fn add_ruler(&mut self, container: ContainerId, ruler: Ruler) -> RulerId;

    fn set_ruler_position(&mut self, id: RulerId, coordinate: i32);

    fn remove_ruler(&mut self, id: RulerId);

    /// Request a layout pass for a container
    fn update_control_sizes(&mut self, container: ContainerId);
}
