//! Anchor island discovery
//!
//! A resizing window drags along every panel edge-connected to it. Siblings
//! are found through the container's snap search on the grabbed edge and
//! then restricted to the connected component around the window; nested
//! children are found against the window's inner edges.

use std::collections::VecDeque;
use tracing::debug;
use crate::container::{Container, SnapQuery};
use crate::math::{Aabb, Axis, Mask, Vec2i};
use crate::panel::{ContainerId, PanelId};
use crate::window::{Anchor, AnchorList};
use super::Workspace;

/// Move every box connected to `seed` out of `pool`
///
/// Breadth-first over the intersects relation: boxes touching the seed are
/// taken first, then boxes touching those, until nothing more is reached.
/// Boxes are expected to be expanded by the connection tolerance already.
pub fn take_connected(seed: Aabb, pool: &mut Vec<(PanelId, Aabb)>) -> Vec<PanelId> {
    let mut island = Vec::new();
    let mut frontier = VecDeque::from([seed]);

    while let Some(current) = frontier.pop_front() {
        let (reached, rest): (Vec<_>, Vec<_>) =
            pool.drain(..).partition(|(_, aabb)| aabb.intersects(&current));
        *pool = rest;

        for (id, aabb) in reached {
            island.push(id);
            frontier.push_back(aabb);
        }
    }

    island
}

impl Workspace {
    /// Build the anchor list for a master resize of `id` with `mask`
    pub(crate) fn collect_anchors(&self, id: PanelId, mask: Mask) -> AnchorList {
        let mut anchors = AnchorList::new();
        let Some(panel) = self.panels.get(id) else {
            return anchors;
        };

        if let Some(container) = panel.container() {
            // Corner drags never pull siblings along
            if mask.is_side() {
                self.recruit_siblings(id, container, mask, &mut anchors);
            }
        }
        if panel.is_window() {
            self.recruit_children(id, mask, &mut anchors);
        }

        debug!(id, ?mask, anchors = ?anchors.ids(), "anchor island");
        anchors
    }

    /// Siblings sharing the grabbed edge's line, limited to the component
    /// connected to the window itself
    fn recruit_siblings(&self, id: PanelId, container: ContainerId, mask: Mask, anchors: &mut AnchorList) {
        let Some(panel) = self.panels.get(id) else {
            return;
        };
        let border = self.panels.snap_border();
        let edge = if mask.has_positive() {
            panel.bottom_right()
        } else {
            panel.top_left()
        };

        let exclude = [id];
        let mut recruits = AnchorList::new();
        self.panels.snap_controls(
            container,
            &SnapQuery::new(edge, mask, &exclude),
            Some(&mut recruits),
        );

        let mut pool: Vec<(PanelId, Aabb)> = recruits
            .iter()
            .filter_map(|a| self.panels.get(a.panel).map(|p| (a.panel, p.aabb().expand(border))))
            .collect();
        let island = take_connected(panel.aabb().expand(border), &mut pool);

        for anchor in recruits {
            if island.contains(&anchor.panel) {
                anchors.push(anchor);
            }
        }
    }

    /// Children touching the inner edges that the mask moves
    ///
    /// A far edge growing drags touching children's far edges with it. A
    /// near edge moving shifts the local origin, so children touching it
    /// grow by the opposite amount to keep their own far edge in place.
    fn recruit_children(&self, id: PanelId, mask: Mask, anchors: &mut AnchorList) {
        let Some(panel) = self.panels.get(id) else {
            return;
        };
        let border = self.panels.snap_border().unsigned_abs();
        let inner = panel.size;

        for &child_id in self.panels.members(ContainerId::Panel(id)) {
            let Some(child) = self.panels.get(child_id) else {
                continue;
            };
            for axis in Axis::BOTH {
                let scale = match mask.get(axis) {
                    1 if child.bottom_right().get(axis).abs_diff(inner.get(axis)) <= border => 1,
                    -1 if child.top_left().get(axis).unsigned_abs() <= border => -1,
                    _ => continue,
                };
                anchors.push(Anchor::new(
                    child_id,
                    Mask::on_axis(axis, 1),
                    Vec2i::ONE.with(axis, scale),
                ));
            }
        }
    }
}
