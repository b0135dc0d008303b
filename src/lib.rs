//! Single-owner state store for unidirectional data flow.
//!
//! See [`store`] for the core; [`counter`] shows how a feature module
//! wires action types, action creators and reducers into a [`store::Store`].

pub mod config;
pub mod counter;
pub mod logging;
pub mod script;
pub mod store;
