//! One reducer per counter action type.

use anyhow::{anyhow, Context};

use super::actions::{increment_action, CounterAction};
use super::state::CounterState;

use crate::counter::CounterDispatcher;

pub fn increment(
    state: &CounterState,
    _action: &CounterAction,
    _dispatcher: &CounterDispatcher,
) -> anyhow::Result<CounterState> {
    let count = state.count.checked_add(1).context("counter overflow")?;
    Ok(CounterState { count })
}

pub fn decrement(
    state: &CounterState,
    _action: &CounterAction,
    _dispatcher: &CounterDispatcher,
) -> anyhow::Result<CounterState> {
    let count = state.count.checked_sub(1).context("counter underflow")?;
    Ok(CounterState { count })
}

/// Adds the integer payload. Any other payload fails the transition.
pub fn add(
    state: &CounterState,
    action: &CounterAction,
    _dispatcher: &CounterDispatcher,
) -> anyhow::Result<CounterState> {
    let amount = action
        .payload()
        .as_i64()
        .ok_or_else(|| anyhow!("ADD expects an integer payload, got {}", action.payload()))?;
    let count = state
        .count
        .checked_add(amount)
        .with_context(|| format!("counter overflow adding {amount}"))?;
    Ok(CounterState { count })
}

pub fn reset(
    _state: &CounterState,
    _action: &CounterAction,
    _dispatcher: &CounterDispatcher,
) -> anyhow::Result<CounterState> {
    Ok(CounterState::default())
}

/// Leaves the state as is and queues two increments.
pub fn increment_twice(
    state: &CounterState,
    _action: &CounterAction,
    dispatcher: &CounterDispatcher,
) -> anyhow::Result<CounterState> {
    dispatcher.dispatch(increment_action())?;
    dispatcher.dispatch(increment_action())?;
    Ok(*state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::actions::{add_action, reset_action, ADD};
    use serde_json::Value;

    /// Handle whose store is already gone; these reducers never dispatch.
    fn detached() -> CounterDispatcher {
        let store = crate::counter::create_store(Default::default()).unwrap();
        store.dispatcher()
    }

    #[test]
    fn add_applies_integer_payload() {
        let next = add(&CounterState::new(2), &add_action(40), &detached()).unwrap();
        assert_eq!(next.count, 42);
    }

    #[test]
    fn add_rejects_non_integer_payload() {
        let action = CounterAction::new(ADD, Value::from("seven"));
        let err = add(&CounterState::new(2), &action, &detached()).unwrap_err();
        assert!(err.to_string().contains("integer payload"));
    }

    #[test]
    fn increment_reports_overflow() {
        let result = increment(&CounterState::new(i64::MAX), &increment_action(), &detached());
        assert!(result.is_err());
    }

    #[test]
    fn reset_returns_zero() {
        let next = reset(&CounterState::new(9), &reset_action(), &detached()).unwrap();
        assert_eq!(next, CounterState::default());
    }
}
