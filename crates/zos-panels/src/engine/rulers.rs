//! Snap guide bookkeeping: at most one ruler per window side

use crate::container::Container;
use crate::panel::{PanelId, Ruler, Side};
use super::Workspace;

impl Workspace {
    /// Show the ruler for `side` at `coordinate`, or hide it on None
    ///
    /// Detached windows never show rulers.
    pub(crate) fn update_ruler(&mut self, id: PanelId, side: Side, coordinate: Option<i32>) {
        let color = self.config.style.ruler_color;
        let Some(panel) = self.panels.get(id) else {
            return;
        };
        let Some(window) = panel.window() else {
            return;
        };
        let current = window.rulers.get(side);

        let slot = match (panel.container(), coordinate, current) {
            (Some(_), Some(c), Some(ruler)) => {
                self.panels.set_ruler_position(ruler, c);
                return;
            }
            (Some(container), Some(c), None) => Some(self.panels.add_ruler(container, Ruler::new(side, c, color))),
            (_, _, Some(ruler)) => {
                self.panels.remove_ruler(ruler);
                None
            }
            _ => return,
        };

        if let Some(window) = self.panels.get_mut(id).and_then(|p| p.window_mut()) {
            window.rulers.set(side, slot);
        }
    }

    /// Remove every ruler a window is showing
    pub(crate) fn remove_rulers(&mut self, id: PanelId) {
        let handles = match self.panels.get_mut(id).and_then(|p| p.window_mut()) {
            Some(window) => window.rulers.take_all(),
            None => return,
        };
        for ruler in handles {
            self.panels.remove_ruler(ruler);
        }
    }
}
