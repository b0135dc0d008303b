//! Action scripts: a recorded sequence of actions to replay against a store.
//!
//! ```toml
//! [[actions]]
//! type = "INCREMENT"
//!
//! [[actions]]
//! type = "ADD"
//! payload = 5
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::store::{Action, ActionType};

/// Errors that can occur when loading an action script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse script: {source}")]
    ParseError {
        #[source]
        source: toml::de::Error,
    },

    #[error("Action #{index} has an empty type")]
    EmptyActionType { index: usize },
}

#[derive(Debug, Deserialize)]
struct ScriptFile {
    #[serde(default)]
    actions: Vec<ScriptEntry>,
}

#[derive(Debug, Deserialize)]
struct ScriptEntry {
    #[serde(rename = "type")]
    action_type: String,
    #[serde(default)]
    payload: Value,
}

/// Ordered list of actions with JSON payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    actions: Vec<Action<Value>>,
}

impl Script {
    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        let file: ScriptFile =
            toml::from_str(content).map_err(|source| ScriptError::ParseError { source })?;

        let actions = file
            .actions
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let name = entry.action_type.trim();
                if name.is_empty() {
                    return Err(ScriptError::EmptyActionType { index });
                }
                Ok(Action::new(ActionType::from_owned(name), entry.payload))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { actions })
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path).map_err(|source| ScriptError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn into_actions(self) -> Vec<Action<Value>> {
        self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_payload_is_null() {
        let script = Script::parse("[[actions]]\ntype = \"RESET\"\n").unwrap();
        let actions = script.into_actions();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].action_type().as_str(), "RESET");
        assert_eq!(actions[0].payload(), &Value::Null);
    }

    #[test]
    fn table_payload_becomes_json_object() {
        let script = Script::parse(
            r#"
[[actions]]
type = "RENAME"
payload = { name = "flux", tags = ["a", "b"] }
"#,
        )
        .unwrap();
        let actions = script.into_actions();
        assert_eq!(
            actions[0].payload(),
            &serde_json::json!({ "name": "flux", "tags": ["a", "b"] })
        );
    }

    #[test]
    fn blank_type_is_rejected() {
        let content = "[[actions]]\ntype = \"INCREMENT\"\n\n[[actions]]\ntype = \"  \"\n";
        let err = Script::parse(content).unwrap_err();
        assert!(matches!(err, ScriptError::EmptyActionType { index: 1 }));
    }

    #[test]
    fn empty_document_is_empty_script() {
        assert!(Script::parse("").unwrap().is_empty());
    }
}
