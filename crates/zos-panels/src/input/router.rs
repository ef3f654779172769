//! Pointer subscription context for active gestures

use crate::panel::PanelId;

/// Tracks which windows receive workspace-wide pointer move/up
///
/// A window subscribes once when its gesture begins and unsubscribes when
/// it ends, so it can never run two gestures at once.
#[derive(Debug, Default)]
pub struct InputRouter {
    subscribers: Vec<PanelId>,
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a window; returns false if it already was
    pub fn subscribe(&mut self, id: PanelId) -> bool {
        if self.subscribers.contains(&id) {
            return false;
        }
        self.subscribers.push(id);
        true
    }

    /// Unsubscribe a window; returns false if it was not subscribed
    pub fn unsubscribe(&mut self, id: PanelId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|&sid| sid != id);
        self.subscribers.len() != before
    }

    #[inline]
    pub fn is_subscribed(&self, id: PanelId) -> bool {
        self.subscribers.contains(&id)
    }

    /// Subscribed windows in subscription order
    #[inline]
    pub fn subscribers(&self) -> &[PanelId] {
        &self.subscribers
    }

    /// Check if any gesture is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        !self.subscribers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_router_subscribe() {
        let mut router = InputRouter::new();
        assert!(!router.is_dragging());

        assert!(router.subscribe(1));
        assert!(router.is_dragging());
        assert!(router.is_subscribed(1));
        assert_eq!(router.subscribers(), &[1]);
    }

    #[test]
    fn test_input_router_single_subscription_per_window() {
        let mut router = InputRouter::new();
        assert!(router.subscribe(1));
        assert!(!router.subscribe(1));
        assert_eq!(router.subscribers().len(), 1);
    }

    #[test]
    fn test_input_router_unsubscribe() {
        let mut router = InputRouter::new();
        router.subscribe(1);
        router.subscribe(2);

        assert!(router.unsubscribe(1));
        assert!(!router.unsubscribe(1));
        assert_eq!(router.subscribers(), &[2]);

        router.unsubscribe(2);
        assert!(!router.is_dragging());
    }
}
