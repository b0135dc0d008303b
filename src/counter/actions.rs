//! Action type identifiers and action creators for the counter.

use serde_json::Value;

use crate::store::{Action, ActionType};

pub type CounterAction = Action<Value>;

// Action type identifiers
pub const INCREMENT: ActionType = ActionType::new("INCREMENT");
pub const DECREMENT: ActionType = ActionType::new("DECREMENT");
pub const ADD: ActionType = ActionType::new("ADD");
pub const RESET: ActionType = ActionType::new("RESET");
/// Queues two `INCREMENT`s through the dispatcher.
pub const INCREMENT_TWICE: ActionType = ActionType::new("INCREMENT_TWICE");

pub fn increment_action() -> CounterAction {
    Action::new(INCREMENT, Value::Null)
}

pub fn decrement_action() -> CounterAction {
    Action::new(DECREMENT, Value::Null)
}

pub fn add_action(amount: i64) -> CounterAction {
    Action::new(ADD, Value::from(amount))
}

pub fn reset_action() -> CounterAction {
    Action::new(RESET, Value::Null)
}

pub fn increment_twice_action() -> CounterAction {
    Action::new(INCREMENT_TWICE, Value::Null)
}
