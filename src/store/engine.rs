use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex, RwLock};
use serde_json::Value;

use super::action::{Action, ActionType};
use super::dispatcher::Dispatcher;
use super::error::StoreError;
use super::reducer::{Reducer, ReducerEntry};
use super::subscription::{SubscriberList, SubscriptionId};

use crate::config::StoreConfig;

/// Result of a successful [`Store::dispatch`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A reducer ran and its state was installed.
    Applied,
    /// No reducer is registered for the type; the state is unchanged.
    Unhandled(ActionType),
    /// A dispatch was already running on this thread; the action will be
    /// applied once it finishes.
    Queued,
}

struct Registered<S, P> {
    reducer: Arc<dyn Reducer<S, P>>,
    meta: Option<Value>,
}

/// Bookkeeping for one outermost dispatch and the follow-ups it triggers.
struct DispatchCycle<P> {
    running: bool,
    pending: VecDeque<Action<P>>,
    accepted: usize,
    overflowed: bool,
}

impl<P> DispatchCycle<P> {
    fn new() -> Self {
        Self {
            running: false,
            pending: VecDeque::new(),
            accepted: 0,
            overflowed: false,
        }
    }

    fn enqueue(
        &mut self,
        action: Action<P>,
        limit: usize,
    ) -> Result<DispatchOutcome, StoreError> {
        if self.overflowed || self.accepted >= limit {
            self.overflowed = true;
            return Err(StoreError::QueueOverflow { limit });
        }
        self.accepted += 1;
        self.pending.push_back(action);
        Ok(DispatchOutcome::Queued)
    }

    fn reset(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        self.running = false;
        self.accepted = 0;
        self.overflowed = false;
        dropped
    }
}

pub(crate) struct StoreInner<S, P> {
    table: HashMap<ActionType, Registered<S, P>>,
    state: RwLock<Arc<S>>,
    subscribers: Mutex<SubscriberList<S>>,
    cycle: ReentrantMutex<RefCell<DispatchCycle<P>>>,
    config: StoreConfig,
    this: Weak<StoreInner<S, P>>,
}

impl<S, P> StoreInner<S, P>
where
    S: Send + Sync + 'static,
    P: Send + 'static,
{
    /// Entry point for every dispatch, direct or through a [`Dispatcher`].
    ///
    /// The re-entrant lock serialises cycles across threads. On the owning
    /// thread a nested call only enqueues; the outermost call drains.
    pub(crate) fn dispatch(&self, action: Action<P>) -> Result<DispatchOutcome, StoreError> {
        let guard = self.cycle.lock();
        let cycle: &RefCell<DispatchCycle<P>> = &guard;

        {
            let mut current = cycle.borrow_mut();
            if current.running {
                tracing::trace!(
                    action_type = %action.action_type(),
                    "Queued follow-up dispatch"
                );
                return current.enqueue(action, self.config.max_queued_dispatches);
            }
            current.running = true;
        }

        // Runs on every exit path, unwinding included, so the store stays
        // usable after a failed or panicking reducer.
        let _cycle_reset = scopeguard::guard((), |_| {
            let dropped = cycle.borrow_mut().reset();
            if dropped > 0 {
                tracing::warn!(dropped, "Dropped queued dispatches after failed cycle");
            }
        });

        let outcome = self.apply(action, cycle)?;
        self.drain(cycle)?;
        Ok(outcome)
    }

    fn drain(&self, cycle: &RefCell<DispatchCycle<P>>) -> Result<(), StoreError> {
        loop {
            if cycle.borrow().overflowed {
                return Err(self.overflow_error());
            }
            let next = cycle.borrow_mut().pending.pop_front();
            let Some(action) = next else {
                return Ok(());
            };
            self.apply(action, cycle).map_err(|err| match err {
                StoreError::Reducer {
                    action_type,
                    source,
                } => StoreError::FollowUpFailed {
                    action_type,
                    source,
                },
                other => other,
            })?;
        }
    }

    /// Lookup, invoke, replace, notify for a single action.
    fn apply(
        &self,
        action: Action<P>,
        cycle: &RefCell<DispatchCycle<P>>,
    ) -> Result<DispatchOutcome, StoreError> {
        let Some(entry) = self.table.get(action.action_type()) else {
            if self.config.warn_on_unhandled {
                tracing::warn!(action_type = %action.action_type(), "Unhandled action type");
            } else {
                tracing::debug!(action_type = %action.action_type(), "Unhandled action type");
            }
            let (action_type, _) = action.into_parts();
            return Ok(DispatchOutcome::Unhandled(action_type));
        };

        let previous = Arc::clone(&*self.state.read());
        let dispatcher = Dispatcher::new(Weak::clone(&self.this));
        let result = entry.reducer.reduce(&previous, &action, &dispatcher);

        // The reducer tripped the follow-up limit: its result is discarded,
        // whether it propagated the overflow or not.
        if cycle.borrow().overflowed {
            return Err(self.overflow_error());
        }

        let next = result.map_err(|source| StoreError::Reducer {
            action_type: action.action_type().clone(),
            source,
        })?;

        let next = Arc::new(next);
        *self.state.write() = Arc::clone(&next);
        tracing::debug!(action_type = %action.action_type(), "Applied action");

        self.notify(&next, &previous);
        Ok(DispatchOutcome::Applied)
    }

    fn notify(&self, new: &S, previous: &S) {
        let snapshot = self.subscribers.lock().snapshot();
        for subscription in snapshot {
            subscription.notify(new, previous);
        }
    }

    fn overflow_error(&self) -> StoreError {
        let limit = self.config.max_queued_dispatches;
        tracing::error!(limit, "Dispatch queue overflow, aborting cycle");
        StoreError::QueueOverflow { limit }
    }
}

/// Single owner of application state.
///
/// Holds exactly one state value and a fixed table mapping action types to
/// reducers. Every transition goes through [`Store::dispatch`]:
///
/// ```text
/// Action ──→ dispatch ──→ Reducer ──→ State ──→ Subscribers
///               ↑                                   │
///               └────────── Dispatcher ─────────────┘
/// ```
///
/// The store is `Send + Sync` when `S` and `P` are `Send`/`Sync`; wrap it in
/// an `Arc` to share it between threads. Dispatch cycles never interleave.
pub struct Store<S, P> {
    inner: Arc<StoreInner<S, P>>,
}

impl<S, P> Store<S, P>
where
    S: Send + Sync + 'static,
    P: Send + 'static,
{
    /// Create a store with the default [`StoreConfig`].
    pub fn new(
        initial: S,
        entries: impl IntoIterator<Item = ReducerEntry<S, P>>,
    ) -> Result<Self, StoreError> {
        Self::with_config(initial, entries, StoreConfig::default())
    }

    /// Create a store.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateActionType`] if two entries share an
    /// action type. No store is created in that case.
    pub fn with_config(
        initial: S,
        entries: impl IntoIterator<Item = ReducerEntry<S, P>>,
        config: StoreConfig,
    ) -> Result<Self, StoreError> {
        let mut table = HashMap::new();
        for entry in entries {
            if table.contains_key(&entry.action_type) {
                return Err(StoreError::DuplicateActionType {
                    action_type: entry.action_type,
                });
            }
            table.insert(
                entry.action_type,
                Registered {
                    reducer: entry.reducer,
                    meta: entry.meta,
                },
            );
        }

        tracing::info!(
            action_types = table.len(),
            max_queued_dispatches = config.max_queued_dispatches,
            "Store created"
        );

        let inner = Arc::new_cyclic(|this| StoreInner {
            table,
            state: RwLock::new(Arc::new(initial)),
            subscribers: Mutex::new(SubscriberList::new()),
            cycle: ReentrantMutex::new(RefCell::new(DispatchCycle::new())),
            config,
            this: Weak::clone(this),
        });
        Ok(Self { inner })
    }

    /// Run one action through the registration table.
    ///
    /// - No reducer for the type: the state is unchanged and
    ///   `DispatchOutcome::Unhandled` is returned.
    /// - Reducer fails: the state keeps its pre-dispatch value and the error
    ///   is returned.
    /// - Otherwise the new state is installed, subscribers are notified in
    ///   subscription order, and any follow-up actions queued meanwhile are
    ///   applied in FIFO order before this call returns.
    ///
    /// When a queued follow-up fails, the transitions already installed stay
    /// installed, the remaining queue is dropped and
    /// [`StoreError::FollowUpFailed`] is returned. [`StoreError::Reducer`] is
    /// only returned when this action's own reducer failed, in which case the
    /// state is unchanged.
    pub fn dispatch(&self, action: Action<P>) -> Result<DispatchOutcome, StoreError> {
        self.inner.dispatch(action)
    }

    /// Current state.
    pub fn state(&self) -> Arc<S> {
        Arc::clone(&*self.inner.state.read())
    }

    /// Register an observer called with `(new_state, previous_state)` after
    /// every applied transition.
    ///
    /// Subscribers added while a notification is in progress are not called
    /// for that notification, only for later ones.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&S, &S) + Send + Sync + 'static,
    {
        self.inner.subscribers.lock().add(callback)
    }

    /// Remove an observer. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.subscribers.lock().remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }

    /// Dispatch-only handle for code that must not own the store.
    pub fn dispatcher(&self) -> Dispatcher<S, P> {
        Dispatcher::new(Arc::downgrade(&self.inner))
    }
}

impl<S, P> Store<S, P> {
    /// Metadata attached to the entry for `action_type`.
    pub fn meta(&self, action_type: &ActionType) -> Option<&Value> {
        self.inner
            .table
            .get(action_type)
            .and_then(|entry| entry.meta.as_ref())
    }

    /// True if a reducer is registered for `action_type`.
    pub fn handles(&self, action_type: &ActionType) -> bool {
        self.inner.table.contains_key(action_type)
    }

    /// Registered action types, sorted by name.
    pub fn action_types(&self) -> Vec<ActionType> {
        let mut types: Vec<ActionType> = self.inner.table.keys().cloned().collect();
        types.sort();
        types
    }

    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }
}

impl<S, P> fmt::Debug for Store<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("action_types", &self.action_types())
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}
