//! Anchor list: panels resizing in lock-step with a window

use crate::math::{Axis, Mask, Vec2i};
use crate::panel::PanelId;

/// A panel recruited into a resize gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub panel: PanelId,
    /// Edges of the anchored panel that follow the gesture
    pub mask: Mask,
    /// Per-axis sign applied to the forwarded offset (-1 inverts the motion)
    pub scale: Vec2i,
}

impl Anchor {
    pub fn new(panel: PanelId, mask: Mask, scale: Vec2i) -> Self {
        Self { panel, mask, scale }
    }
}

/// Ordered set of anchors, at most one entry per panel
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnchorList {
    entries: Vec<Anchor>,
}

impl AnchorList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Anchor> {
        self.entries.iter()
    }

    /// Anchored panel ids in order
    pub fn ids(&self) -> Vec<PanelId> {
        self.entries.iter().map(|a| a.panel).collect()
    }

    pub fn contains(&self, panel: PanelId) -> bool {
        self.entries.iter().any(|a| a.panel == panel)
    }

    pub fn get(&self, panel: PanelId) -> Option<&Anchor> {
        self.entries.iter().find(|a| a.panel == panel)
    }

    /// Add an anchor; a panel already present takes the new mask and
    /// scale on the axes the new entry selects
    pub fn push(&mut self, anchor: Anchor) {
        match self.entries.iter_mut().find(|a| a.panel == anchor.panel) {
            Some(existing) => {
                for axis in Axis::BOTH {
                    if anchor.mask.get(axis) != 0 {
                        existing.scale.set(axis, anchor.scale.get(axis));
                    }
                }
                existing.mask = existing.mask.merge(anchor.mask);
            }
            None => self.entries.push(anchor),
        }
    }
}

impl IntoIterator for AnchorList {
    type Item = Anchor;
    type IntoIter = std::vec::IntoIter<Anchor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_list_push_distinct() {
        let mut list = AnchorList::new();
        list.push(Anchor::new(1, Mask::LEFT, Vec2i::ONE));
        list.push(Anchor::new(2, Mask::RIGHT, Vec2i::ONE));

        assert_eq!(list.len(), 2);
        assert_eq!(list.ids(), vec![1, 2]);
        assert!(list.contains(2));
        assert!(!list.contains(3));
    }

    #[test]
    fn test_anchor_list_merges_same_panel() {
        let mut list = AnchorList::new();
        list.push(Anchor::new(7, Mask::RIGHT, Vec2i::new(-1, 1)));
        list.push(Anchor::new(7, Mask::BOTTOM, Vec2i::new(1, 1)));

        assert_eq!(list.len(), 1);
        let anchor = list.get(7).unwrap();
        assert_eq!(anchor.mask, Mask::BOTTOM_RIGHT);
        // X keeps the scale of the first entry
        assert_eq!(anchor.scale, Vec2i::new(-1, 1));
    }
}
