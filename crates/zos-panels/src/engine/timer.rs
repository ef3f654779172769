//! Detach timer for motionless resize holds
//!
//! Holding a resize handle still for the configured time drops the anchor
//! island so the window can be resized on its own.

use tracing::debug;
use crate::panel::{Panel, PanelId};
use super::Workspace;

/// One-shot timer armed by a master resize begin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetachTimer {
    pub window: PanelId,
    /// Workspace time at which the timer fires
    pub due_ms: f64,
    /// Gesture serial the timer belongs to
    pub gesture: u64,
}

impl Workspace {
    /// Fire every timer due at `now_ms`; returns how many detached
    ///
    /// Timers whose gesture has ended, or which saw movement, are dropped
    /// without effect.
    pub fn advance(&mut self, now_ms: f64) -> usize {
        let (due, pending): (Vec<_>, Vec<_>) =
            self.timers.drain(..).partition(|t| t.due_ms <= now_ms);
        self.timers = pending;

        let mut fired = 0;
        for timer in due {
            if self.is_live(&timer) {
                self.fire_detach(timer.window);
                fired += 1;
            }
        }
        fired
    }

    /// Timers armed and not yet due
    pub fn pending_timers(&self) -> &[DetachTimer] {
        &self.timers
    }

    fn is_live(&self, timer: &DetachTimer) -> bool {
        let Some(panel) = self.panels.get(timer.window) else {
            return false;
        };
        let Some(window) = panel.window() else {
            return false;
        };
        let still = window
            .drag()
            .and_then(|d| d.as_resize())
            .is_some_and(|drag| !drag.moved);
        window.gesture == Some(timer.gesture) && still
    }

    /// End the anchored panels and drop the window's rulers; the window's
    /// own resize carries on
    fn fire_detach(&mut self, id: PanelId) {
        let anchors = match self.panels.get_mut(id).and_then(Panel::as_resizable_mut) {
            Some(resizable) => resizable.take_anchors(),
            None => return,
        };
        debug!(id, detached = ?anchors.ids(), "detach timer fired");

        for anchor in anchors {
            self.finish_sizing(anchor.panel);
        }
        self.remove_rulers(id);
    }
}
