use thiserror::Error;

use super::action::ActionType;

/// Errors surfaced by store construction and dispatch.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Two registration entries share an action type.
    #[error("Reducer already registered for action type '{action_type}'")]
    DuplicateActionType { action_type: ActionType },

    /// The reducer for `action_type` failed; the state was left untouched.
    #[error("Reducer for action type '{action_type}' failed: {source}")]
    Reducer {
        action_type: ActionType,
        #[source]
        source: anyhow::Error,
    },

    /// A follow-up queued during the dispatch failed. The dispatched action
    /// and any follow-ups before the failing one stay applied; the failing
    /// follow-up was rolled back and the rest of the queue dropped.
    #[error("Follow-up action '{action_type}' failed: {source}")]
    FollowUpFailed {
        action_type: ActionType,
        #[source]
        source: anyhow::Error,
    },

    /// Too many follow-up dispatches were queued during one dispatch cycle.
    #[error("Dispatch queue overflow: more than {limit} follow-up dispatches in one cycle")]
    QueueOverflow { limit: usize },

    /// The store behind a dispatcher handle has been dropped.
    #[error("Store has been dropped")]
    Closed,
}

impl StoreError {
    /// True for conditions that indicate a broken configuration or a runaway
    /// dispatch chain, as opposed to a single failed transition.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            StoreError::DuplicateActionType { .. } | StoreError::QueueOverflow { .. }
        )
    }

    /// The action type involved, when the error concerns a single type.
    pub fn action_type(&self) -> Option<&ActionType> {
        match self {
            StoreError::DuplicateActionType { action_type }
            | StoreError::Reducer { action_type, .. }
            | StoreError::FollowUpFailed { action_type, .. } => Some(action_type),
            StoreError::QueueOverflow { .. } | StoreError::Closed => None,
        }
    }
}
