//! State observers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Token returned by [`Store::subscribe`](super::Store::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<S> = dyn Fn(&S, &S) + Send + Sync;

pub(crate) struct Subscription<S> {
    id: SubscriptionId,
    callback: Box<Callback<S>>,
    active: AtomicBool,
}

impl<S> Subscription<S> {
    /// Invoke the callback with `(new, previous)` unless it was unsubscribed,
    /// including unsubscribed earlier in the same notification pass.
    pub(crate) fn notify(&self, new: &S, previous: &S) {
        if self.active.load(Ordering::Acquire) {
            (self.callback)(new, previous);
        }
    }
}

/// Subscribers in subscription order.
pub(crate) struct SubscriberList<S> {
    next_id: u64,
    entries: Vec<Arc<Subscription<S>>>,
}

impl<S> SubscriberList<S> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn add<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&S, &S) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push(Arc::new(Subscription {
            id,
            callback: Box::new(callback),
            active: AtomicBool::new(true),
        }));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let Some(pos) = self.entries.iter().position(|s| s.id == id) else {
            return false;
        };
        let removed = self.entries.remove(pos);
        removed.active.store(false, Ordering::Release);
        true
    }

    /// Copy of the current list. Notification iterates the copy so callbacks
    /// may subscribe or unsubscribe without holding the list lock.
    pub(crate) fn snapshot(&self) -> Vec<Arc<Subscription<S>>> {
        self.entries.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
