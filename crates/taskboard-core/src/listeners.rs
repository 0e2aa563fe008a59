//! Listener registry shared by the viewport and language event sources.
//!
//! Events are dispatched on the UI thread, so the registry is not `Sync`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Rc<dyn Fn(&T)>;

pub(crate) struct Listeners<T> {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(SubscriptionId, Listener<T>)>>,
}

impl<T> Listeners<T> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            entries: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn subscribe(&self, listener: Rc<dyn Fn(&T)>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get() + 1);
        self.next_id.set(id.0);
        self.entries.borrow_mut().push((id, listener));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub(crate) fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(existing, _)| *existing != id);
        entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Calls every listener with `event`.
    ///
    /// The registry is snapshotted first so listeners may subscribe or
    /// unsubscribe while being notified.
    pub(crate) fn emit(&self, event: &T) {
        let snapshot: Vec<Listener<T>> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(event);
        }
    }
}
