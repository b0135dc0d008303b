use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub store: StoreConfig,
}

/// Tunables for [`Store`](crate::store::Store).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Follow-up dispatches accepted during one outermost dispatch before the
    /// cycle is aborted with a queue overflow (default: 1024).
    #[serde(default = "default_max_queued_dispatches")]
    pub max_queued_dispatches: usize,
    /// Log unhandled action types at warn level instead of debug (default: true).
    #[serde(default = "default_warn_on_unhandled")]
    pub warn_on_unhandled: bool,
}

fn default_max_queued_dispatches() -> usize {
    1024
}

fn default_warn_on_unhandled() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_queued_dispatches: default_max_queued_dispatches(),
            warn_on_unhandled: default_warn_on_unhandled(),
        }
    }
}
