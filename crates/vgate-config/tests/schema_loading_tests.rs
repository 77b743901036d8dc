//! Loading option schemas from documents and resolving configured values

use pretty_assertions::assert_eq;
use std::collections::HashMap;
use vgate_config::{ConfigError, SchemaSet};
use vgate_test_utils::CapturingSink;

const JSON_SCHEMAS: &str = r#"{
    "options": [
        { "name": "log_format", "label": "log format", "choices": ["line", "json"], "default": "line" },
        { "name": "transport", "choices": ["stdio", "tcp", "unix"] }
    ]
}"#;

const YAML_SCHEMAS: &str = r#"
options:
  - name: log_format
    label: log format
    choices: [line, json]
    default: line
  - name: transport
    choices: [stdio, tcp, unix]
"#;

#[test]
fn test_json_and_yaml_agree() {
    let from_json = SchemaSet::from_json(JSON_SCHEMAS).unwrap();
    let from_yaml = SchemaSet::from_yaml(YAML_SCHEMAS).unwrap();
    assert_eq!(from_json.to_document(), from_yaml.to_document());
    assert_eq!(from_json.names().collect::<Vec<_>>(), vec!["log_format", "transport"]);
}

#[test]
fn test_document_survives_reserialization() {
    let set = SchemaSet::from_json(JSON_SCHEMAS).unwrap();
    let json = serde_json::to_string(&set.to_document()).unwrap();
    let reloaded = SchemaSet::from_json(&json).unwrap();
    assert_eq!(reloaded.to_document(), set.to_document());
}

#[test]
fn test_malformed_documents() {
    assert!(matches!(
        SchemaSet::from_json("{ not json"),
        Err(ConfigError::InvalidJson(_))
    ));
    assert!(matches!(
        SchemaSet::from_yaml("options: [ {name: a"),
        Err(ConfigError::InvalidYaml(_))
    ));

    let duplicated = r#"{ "options": [
        { "name": "mode", "choices": ["a", "a"] }
    ] }"#;
    let err = SchemaSet::from_json(duplicated).unwrap_err();
    assert!(err.is_schema_error());
    assert_eq!(err.to_string(), "option 'mode' lists choice 'a' more than once");
}

#[test]
fn test_resolved_selection_dispatches() {
    let set = SchemaSet::from_yaml(YAML_SCHEMAS).unwrap();
    let transport = set.resolve("transport", Some("tcp")).unwrap();

    let port: Option<u16> = transport
        .value_from(HashMap::from([
            ("stdio".to_string(), None),
            ("tcp".to_string(), Some(7000)),
            ("unix".to_string(), None),
        ]))
        .unwrap();
    assert_eq!(port, Some(7000));

    let err = transport
        .value_from(HashMap::from([
            ("stdio".to_string(), None::<u16>),
            ("tcp".to_string(), Some(7000)),
        ]))
        .unwrap_err();
    assert_eq!(err.to_string(), "missing options for [unix]");
}

#[test]
fn test_illegal_value_is_logged_through_injected_sink() {
    let sink = CapturingSink::new();
    let set = SchemaSet::from_json(JSON_SCHEMAS).unwrap().with_sink(sink.clone());

    let err = set.resolve("log_format", Some("raw")).unwrap_err();
    assert!(matches!(err, ConfigError::Select(ref e) if e.is_unsupported()));
    assert_eq!(
        sink.messages(),
        vec!["unsupported log format 'raw'; expected one of [line, json]".to_string()]
    );

    // Missing option names are configuration mistakes, not selection failures
    assert!(set.resolve("color", Some("red")).is_err());
    assert_eq!(sink.count(), 1);
}
