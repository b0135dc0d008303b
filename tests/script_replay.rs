mod common;

use common::temp_file;
use fluxstore::config::StoreConfig;
use fluxstore::counter::create_store;
use fluxstore::script::{Script, ScriptError};
use fluxstore::store::DispatchOutcome;

const SCRIPT: &str = r#"
[[actions]]
type = "INCREMENT"

[[actions]]
type = "ADD"
payload = 5

[[actions]]
type = "UNKNOWN"

[[actions]]
type = "ADD"
payload = "oops"

[[actions]]
type = "INCREMENT_TWICE"
"#;

#[test]
fn replay_script_against_counter() {
    let (_dir, path) = temp_file("actions.toml", SCRIPT);
    let script = Script::load(&path).unwrap();
    assert_eq!(script.len(), 5);

    let store = create_store(StoreConfig::default()).unwrap();
    let outcomes: Vec<_> = script
        .into_actions()
        .into_iter()
        .map(|action| store.dispatch(action))
        .collect();

    assert!(matches!(outcomes[0], Ok(DispatchOutcome::Applied)));
    assert!(matches!(outcomes[1], Ok(DispatchOutcome::Applied)));
    assert!(matches!(outcomes[2], Ok(DispatchOutcome::Unhandled(_))));
    assert!(outcomes[3].is_err());
    assert!(matches!(outcomes[4], Ok(DispatchOutcome::Applied)));
    assert_eq!(store.state().count, 8);
}

#[test]
fn missing_script_is_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = Script::load(&dir.path().join("none.toml")).unwrap_err();
    assert!(matches!(err, ScriptError::ReadError { .. }));
}

#[test]
fn action_without_type_is_parse_error() {
    let err = Script::parse("[[actions]]\npayload = 1\n").unwrap_err();
    assert!(matches!(err, ScriptError::ParseError { .. }));
}
