//! Unidirectional data flow store.
//!
//! This module provides the single owner of application state and the
//! primitives that feed it.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Store::dispatch ──→ Reducer ──→ State ──→ Subscriber
//!    ↑                                                    │
//!    └────────────────────────────────────────────────────┘
//! ```
//!
//! - **Action**: immutable value describing what happened
//! - **Reducer**: pure function `(state, action, dispatcher) -> state`
//! - **Store**: holds the state, routes each action to its one reducer
//! - **Dispatcher**: dispatch-only handle for reducers and observers

mod action;
mod dispatcher;
mod engine;
mod error;
mod reducer;
mod subscription;

pub use action::{Action, ActionType};
pub use dispatcher::Dispatcher;
pub use engine::{DispatchOutcome, Store};
pub use error::StoreError;
pub use reducer::{Reducer, ReducerEntry};
pub use subscription::SubscriptionId;
