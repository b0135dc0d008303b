//! Narrow dispatch capability handed to reducers and observers.

use std::fmt;
use std::sync::Weak;

use super::action::Action;
use super::engine::{DispatchOutcome, StoreInner};
use super::error::StoreError;

/// Handle that can only dispatch actions into its store.
///
/// It grants no access to the state or the registration table. The handle
/// holds a weak reference, so storing it inside a subscriber or a reducer
/// does not keep the store alive.
pub struct Dispatcher<S, P> {
    inner: Weak<StoreInner<S, P>>,
}

impl<S, P> Dispatcher<S, P>
where
    S: Send + Sync + 'static,
    P: Send + 'static,
{
    pub(crate) fn new(inner: Weak<StoreInner<S, P>>) -> Self {
        Self { inner }
    }

    /// Submit an action to the store.
    ///
    /// Called while the store is already dispatching on this thread (from a
    /// reducer or a subscriber), the action is queued and
    /// `DispatchOutcome::Queued` is returned right away.
    pub fn dispatch(&self, action: Action<P>) -> Result<DispatchOutcome, StoreError> {
        match self.inner.upgrade() {
            Some(inner) => inner.dispatch(action),
            None => Err(StoreError::Closed),
        }
    }
}

impl<S, P> Dispatcher<S, P> {
    /// False once the store has been dropped.
    pub fn is_connected(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

impl<S, P> Clone for Dispatcher<S, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<S, P> fmt::Debug for Dispatcher<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("connected", &self.is_connected())
            .finish()
    }
}
