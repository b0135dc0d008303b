//! Action values and their type identifiers.

use std::borrow::Cow;
use std::fmt;

/// Identifier for a category of state transition.
///
/// Identifiers are usually declared once as module-level constants:
///
/// ```
/// use fluxstore::store::ActionType;
///
/// pub const INCREMENT: ActionType = ActionType::new("INCREMENT");
/// ```
///
/// Two identifiers are equal when their names are equal, so a name must be
/// unique across every reducer table it is registered in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionType(Cow<'static, str>);

impl ActionType {
    /// Create an identifier from a static name. Usable in `const` items.
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Create an identifier from a name only known at runtime
    /// (descriptors, scripts).
    pub fn from_owned(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ActionType {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

/// Immutable description of "what happened".
///
/// Created by an action creator and consumed exactly once by
/// [`Store::dispatch`](super::Store::dispatch).
#[derive(Debug, Clone, PartialEq)]
pub struct Action<P> {
    action_type: ActionType,
    payload: P,
}

impl<P> Action<P> {
    pub fn new(action_type: ActionType, payload: P) -> Self {
        Self {
            action_type,
            payload,
        }
    }

    pub fn action_type(&self) -> &ActionType {
        &self.action_type
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Split the action into its type and payload.
    pub fn into_parts(self) -> (ActionType, P) {
        (self.action_type, self.payload)
    }
}

impl<P: Default> Action<P> {
    /// Action carrying the default payload.
    pub fn bare(action_type: ActionType) -> Self {
        Self::new(action_type, P::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PING: ActionType = ActionType::new("PING");

    #[test]
    fn static_and_owned_names_compare_equal() {
        assert_eq!(PING, ActionType::from_owned("PING".to_string()));
        assert_ne!(PING, ActionType::new("PONG"));
    }

    #[test]
    fn bare_action_uses_default_payload() {
        let action: Action<Option<u8>> = Action::bare(PING);
        assert_eq!(action.action_type().as_str(), "PING");
        assert!(action.payload().is_none());
    }
}
