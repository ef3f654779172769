//! Panel manager: panel ownership, container membership, rulers

use std::collections::HashMap;
use tracing::trace;
use crate::error::PanelError;
use crate::math::{Axis, Mask, PanelStyle, SnapCode, SnapResult, Vec2i};
use crate::panel::{ContainerId, Panel, PanelId, Ruler, RulerId};
use crate::window::{Anchor, AnchorList, Window, WindowConfig};
use super::{Container, SnapQuery};

/// Owns every panel and tracks which container each one belongs to
pub struct PanelManager {
    /// All panels by ID, attached or not
    panels: HashMap<PanelId, Panel>,
    /// Members of each container (back to front)
    members: HashMap<ContainerId, Vec<PanelId>>,
    /// Live rulers and the container that renders them
    rulers: HashMap<RulerId, (ContainerId, Ruler)>,
    /// Containers awaiting a layout pass, in request order
    layout_requests: Vec<ContainerId>,
    style: PanelStyle,
    next_id: u64,
    next_ruler: u64,
}

impl Default for PanelManager {
    fn default() -> Self {
        Self::new(PanelStyle::default())
    }
}

impl PanelManager {
    /// Create an empty panel manager
    pub fn new(style: PanelStyle) -> Self {
        Self {
            panels: HashMap::new(),
            members: HashMap::new(),
            rulers: HashMap::new(),
            layout_requests: Vec::new(),
            style,
            next_id: 1,
            next_ruler: 1,
        }
    }

    fn allocate(&mut self, position: Vec2i, size: Vec2i, window: Option<Window>) -> PanelId {
        let id = self.next_id;
        self.next_id += 1;

        let size = size.max(Vec2i::splat(self.style.min_size));
        self.panels.insert(id, Panel::new(id, position, size, window));
        id
    }

    /// Create a detached window
    pub fn create_window(&mut self, config: WindowConfig) -> PanelId {
        let window = Window::new(config.title, &self.style);
        self.allocate(config.position, config.size, Some(window))
    }

    /// Create a detached plain panel
    pub fn create_panel(&mut self, position: Vec2i, size: Vec2i) -> PanelId {
        self.allocate(position, size, None)
    }

    /// Add a panel to a container, moving it out of its previous one
    pub fn attach(&mut self, id: PanelId, container: ContainerId) -> Result<(), PanelError> {
        if !self.panels.contains_key(&id) {
            return Err(PanelError::UnknownPanel(id));
        }

        if let ContainerId::Panel(host) = container {
            let host_panel = self.panels.get(&host).ok_or(PanelError::UnknownPanel(host))?;
            if !host_panel.is_window() {
                return Err(PanelError::NotAWindow(host));
            }
            if self.is_within(host, id) {
                return Err(PanelError::ContainerCycle { panel: id, container });
            }
        }

        self.unlink(id);
        self.members.entry(container).or_default().push(id);
        if let Some(panel) = self.panels.get_mut(&id) {
            panel.container = Some(container);
        }
        Ok(())
    }

    /// Remove a panel from its container without destroying it
    ///
    /// Rulers the panel was showing are removed with it.
    pub fn detach(&mut self, id: PanelId) -> Result<(), PanelError> {
        if !self.panels.contains_key(&id) {
            return Err(PanelError::UnknownPanel(id));
        }
        self.unlink(id);
        self.remove_rulers_of(id);
        Ok(())
    }

    /// Destroy a panel and everything nested inside it
    pub fn destroy(&mut self, id: PanelId) -> Result<Panel, PanelError> {
        self.discard(id).ok_or(PanelError::UnknownPanel(id))
    }

    /// Destroy a panel subtree; None when `id` is unknown
    pub(crate) fn discard(&mut self, id: PanelId) -> Option<Panel> {
        if !self.panels.contains_key(&id) {
            return None;
        }
        self.unlink(id);
        self.remove_rulers_of(id);

        let mut nested = self.members.remove(&ContainerId::Panel(id)).unwrap_or_default();
        while let Some(child) = nested.pop() {
            self.rulers.retain(|_, (owner, _)| *owner != ContainerId::Panel(child));
            nested.extend(self.members.remove(&ContainerId::Panel(child)).unwrap_or_default());
            self.panels.remove(&child);
        }
        self.rulers.retain(|_, (owner, _)| *owner != ContainerId::Panel(id));

        self.panels.remove(&id)
    }

    /// Drop a panel from its container's member list
    fn unlink(&mut self, id: PanelId) {
        let Some(container) = self.panels.get_mut(&id).and_then(|p| p.container.take()) else {
            return;
        };
        if let Some(list) = self.members.get_mut(&container) {
            list.retain(|&pid| pid != id);
        }
    }

    fn remove_rulers_of(&mut self, id: PanelId) {
        let handles = match self.panels.get_mut(&id).and_then(Panel::window_mut) {
            Some(window) => window.rulers.take_all(),
            None => return,
        };
        for handle in handles {
            self.rulers.remove(&handle);
        }
    }

    /// Check whether `id` is `ancestor` or nested anywhere inside it
    fn is_within(&self, id: PanelId, ancestor: PanelId) -> bool {
        let mut current = Some(id);
        while let Some(pid) = current {
            if pid == ancestor {
                return true;
            }
            current = match self.panels.get(&pid).and_then(|p| p.container) {
                Some(ContainerId::Panel(parent)) => Some(parent),
                _ => None,
            };
        }
        false
    }

    /// Get a panel by ID
    pub fn get(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(&id)
    }

    /// Get a mutable panel by ID
    pub fn get_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.get_mut(&id)
    }

    /// Members of a container, back to front
    pub fn members(&self, container: ContainerId) -> &[PanelId] {
        self.members.get(&container).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Get the number of panels
    pub fn count(&self) -> usize {
        self.panels.len()
    }

    /// Workspace position of a container's origin
    pub fn origin(&self, container: ContainerId) -> Vec2i {
        let mut origin = Vec2i::ZERO;
        let mut current = container;
        while let ContainerId::Panel(pid) = current {
            let Some(panel) = self.panels.get(&pid) else {
                break;
            };
            origin += panel.position;
            match panel.container {
                Some(parent) => current = parent,
                None => break,
            }
        }
        origin
    }

    /// Get a ruler by ID
    pub fn ruler(&self, id: RulerId) -> Option<&Ruler> {
        self.rulers.get(&id).map(|(_, ruler)| ruler)
    }

    /// Rulers rendered by a container
    pub fn rulers_in(&self, container: ContainerId) -> impl Iterator<Item = &Ruler> {
        self.rulers
            .values()
            .filter(move |(owner, _)| *owner == container)
            .map(|(_, ruler)| ruler)
    }

    /// Get the number of live rulers
    pub fn ruler_count(&self) -> usize {
        self.rulers.len()
    }

    /// Drain pending layout requests
    pub fn take_layout_requests(&mut self) -> Vec<ContainerId> {
        std::mem::take(&mut self.layout_requests)
    }
}

impl Container for PanelManager {
    fn snap_controls(
        &self,
        container: ContainerId,
        query: &SnapQuery<'_>,
        mut anchors: Option<&mut AnchorList>,
    ) -> SnapResult {
        let border = self.style.snap_border.unsigned_abs();
        let mut result = SnapResult::none(query.point);

        for axis in Axis::BOTH {
            if query.direction.get(axis) == 0 {
                continue;
            }
            let reference = query.point.get(axis);
            let mut best: Option<(u32, i32)> = None;

            for &id in self.members(container) {
                if query.exclude.contains(&id) {
                    continue;
                }
                let Some(panel) = self.panels.get(&id) else {
                    continue;
                };
                let near = panel.position.get(axis);
                let far = near.saturating_add(panel.size.get(axis));

                for (edge, side) in [(near, -1), (far, 1)] {
                    let distance = edge.abs_diff(reference);
                    if distance > border {
                        continue;
                    }
                    if best.map_or(true, |(d, _)| distance < d) {
                        best = Some((distance, edge));
                    }
                    if let Some(list) = anchors.as_deref_mut() {
                        list.push(Anchor::new(id, Mask::on_axis(axis, side), query.scale));
                    }
                }
            }

            if let Some((_, edge)) = best {
                trace!(?axis, reference, edge, "snap hit");
                result.code |= SnapCode::for_axis(axis);
                result.point.set(axis, edge);
            }
        }

        result
    }

    fn snap_border(&self) -> i32 {
        self.style.snap_border
    }

    fn add_ruler(&mut self, container: ContainerId, ruler: Ruler) -> RulerId {
        let id = self.next_ruler;
        self.next_ruler += 1;
        self.rulers.insert(id, (container, ruler));
        id
    }

    fn set_ruler_position(&mut self, id: RulerId, coordinate: i32) {
        if let Some((_, ruler)) = self.rulers.get_mut(&id) {
            ruler.set_position(coordinate);
        }
    }

    fn remove_ruler(&mut self, id: RulerId) {
        self.rulers.remove(&id);
    }

    fn update_control_sizes(&mut self, container: ContainerId) {
        if !self.layout_requests.contains(&container) {
            self.layout_requests.push(container);
        }
    }
}
