//! Counter feature: the wiring a page entry point would generate.
//!
//! - `actions`: type identifiers and action creators
//! - `state`: the counter state
//! - `reducer`: one reducer per action type
//!
//! [`reducer_entries`] is the registration list handed to the store.

pub mod actions;
pub mod reducer;
pub mod state;

use serde_json::{json, Value};

use crate::config::StoreConfig;
use crate::store::{Dispatcher, ReducerEntry, Store, StoreError};

pub use actions::CounterAction;
pub use state::CounterState;

pub type CounterStore = Store<CounterState, Value>;
pub type CounterDispatcher = Dispatcher<CounterState, Value>;

/// Registration list: `(type, reducer, meta)` per action type.
pub fn reducer_entries() -> Vec<ReducerEntry<CounterState, Value>> {
    vec![
        ReducerEntry::new(actions::INCREMENT, reducer::increment)
            .with_meta(json!({ "description": "Add one to the counter" })),
        ReducerEntry::new(actions::DECREMENT, reducer::decrement)
            .with_meta(json!({ "description": "Subtract one from the counter" })),
        ReducerEntry::new(actions::ADD, reducer::add)
            .with_meta(json!({ "description": "Add the integer payload to the counter" })),
        ReducerEntry::new(actions::RESET, reducer::reset)
            .with_meta(json!({ "description": "Set the counter back to zero" })),
        ReducerEntry::new(actions::INCREMENT_TWICE, reducer::increment_twice)
            .with_meta(json!({ "description": "Queue two increments" })),
    ]
}

/// Build the counter store starting from zero.
pub fn create_store(config: StoreConfig) -> Result<CounterStore, StoreError> {
    Store::with_config(CounterState::default(), reducer_entries(), config)
}
