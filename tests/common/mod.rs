//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use fluxstore::store::{Action, ActionType, Dispatcher, ReducerEntry, Store};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const INCREMENT: ActionType = ActionType::new("INCREMENT");
pub const FAIL: ActionType = ActionType::new("FAIL");

/// Minimal state used by store tests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Count {
    pub count: i64,
}

/// Ordered record of reducer and subscriber calls.
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, entry: impl Into<String>) {
        self.0.lock().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().clone()
    }
}

pub fn action(action_type: ActionType) -> Action<()> {
    Action::new(action_type, ())
}

/// Store with `INCREMENT` (+1) and `FAIL` (always errors).
pub fn counting_store() -> Store<Count, ()> {
    Store::new(
        Count::default(),
        [
            ReducerEntry::from_fn(INCREMENT, |state: &Count, _, _| {
                Ok(Count {
                    count: state.count + 1,
                })
            }),
            ReducerEntry::from_fn(FAIL, |_, _, _| Err(anyhow::anyhow!("reducer failed"))),
        ],
    )
    .expect("store construction")
}

/// Write `content` to a file named `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
