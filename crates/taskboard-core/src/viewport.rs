//! Viewport width observation.
//!
//! The layout controller never reads the window size itself. The shell owns
//! a [`ViewportObserver`] and forwards its resize notifications, which lets
//! tests drive the layout with synthetic widths.

use std::cell::Cell;
use std::rc::Rc;

use crate::listeners::{Listeners, SubscriptionId};

/// Source of viewport width changes.
pub trait ViewportObserver {
    /// Current viewport width in CSS pixels.
    fn width(&self) -> f64;

    /// Registers `listener`, called with the new width on every resize.
    fn subscribe(&self, listener: Rc<dyn Fn(&f64)>) -> SubscriptionId;

    /// Removes a listener. Unknown ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);
}

/// Broadcasts resize events to subscribers.
///
/// The desktop shell feeds it from the root element's resize events; tests
/// call [`ViewportHub::resize`] directly.
pub struct ViewportHub {
    width: Cell<f64>,
    listeners: Listeners<f64>,
}

impl ViewportHub {
    /// Create a hub reporting `width` until the first resize.
    pub fn new(width: f64) -> Self {
        Self {
            width: Cell::new(width),
            listeners: Listeners::new(),
        }
    }

    /// Records a new width and notifies every subscriber.
    ///
    /// Events are not debounced; each call is dispatched.
    pub fn resize(&self, width: f64) {
        self.width.set(width);
        self.listeners.emit(&width);
    }

    /// Number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ViewportObserver for ViewportHub {
    fn width(&self) -> f64 {
        self.width.get()
    }

    fn subscribe(&self, listener: Rc<dyn Fn(&f64)>) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        if !self.listeners.unsubscribe(id) {
            tracing::debug!(?id, "Ignoring unknown viewport subscription");
        }
    }
}
