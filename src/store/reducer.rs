//! Reducer trait and registration entries.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::action::{Action, ActionType};
use super::dispatcher::Dispatcher;

/// Reducer computes the next state for one action type.
///
/// The reducer is the only place where state transitions happen. It receives
/// the current state by shared reference and returns a new value; returning
/// an error leaves the store on the state it had before the dispatch.
///
/// "No change" is expressed by returning a copy of the current state.
///
/// Closures and functions with the matching signature implement this trait:
///
/// ```
/// use fluxstore::store::{Action, Dispatcher, Reducer};
///
/// fn double(state: &u32, _: &Action<()>, _: &Dispatcher<u32, ()>) -> anyhow::Result<u32> {
///     Ok(state * 2)
/// }
///
/// fn assert_reducer<R: Reducer<u32, ()>>(_: R) {}
/// assert_reducer(double);
/// ```
pub trait Reducer<S, P>: Send + Sync {
    /// Compute the state that follows `state` once `action` is applied.
    ///
    /// `dispatcher` may be used to queue follow-up actions; they run after
    /// this dispatch and its notifications have finished.
    fn reduce(
        &self,
        state: &S,
        action: &Action<P>,
        dispatcher: &Dispatcher<S, P>,
    ) -> anyhow::Result<S>;
}

impl<S, P, F> Reducer<S, P> for F
where
    F: Fn(&S, &Action<P>, &Dispatcher<S, P>) -> anyhow::Result<S> + Send + Sync,
{
    fn reduce(
        &self,
        state: &S,
        action: &Action<P>,
        dispatcher: &Dispatcher<S, P>,
    ) -> anyhow::Result<S> {
        self(state, action, dispatcher)
    }
}

/// One row of the registration table: `(type, reducer, meta)`.
pub struct ReducerEntry<S, P> {
    pub(crate) action_type: ActionType,
    pub(crate) reducer: Arc<dyn Reducer<S, P>>,
    pub(crate) meta: Option<Value>,
}

impl<S, P> ReducerEntry<S, P> {
    pub fn new<R>(action_type: ActionType, reducer: R) -> Self
    where
        R: Reducer<S, P> + 'static,
    {
        Self {
            action_type,
            reducer: Arc::new(reducer),
            meta: None,
        }
    }

    /// Entry for a closure reducer.
    ///
    /// Same as [`ReducerEntry::new`], but the `Fn` bound lets the compiler
    /// infer the closure's argument types.
    pub fn from_fn<F>(action_type: ActionType, reducer: F) -> Self
    where
        F: Fn(&S, &Action<P>, &Dispatcher<S, P>) -> anyhow::Result<S> + Send + Sync + 'static,
    {
        Self {
            action_type,
            reducer: Arc::new(reducer),
            meta: None,
        }
    }

    /// Attach free-form metadata to the entry.
    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn action_type(&self) -> &ActionType {
        &self.action_type
    }

    pub fn meta(&self) -> Option<&Value> {
        self.meta.as_ref()
    }
}

impl<S, P> fmt::Debug for ReducerEntry<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReducerEntry")
            .field("action_type", &self.action_type)
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}
