//! AST serialization behind the `serde` feature
#![cfg(feature = "serde")]

use crate::helpers::parse_helpers::parse_ok;
use crate::helpers::source_fixtures::BANKING;
use scl::parser::{Name, Program};

#[test]
fn test_program_json_roundtrip() {
    let program = parse_ok(BANKING);
    let json = serde_json::to_string(&program).unwrap();
    let back: Program = serde_json::from_str(&json).unwrap();
    assert_eq!(back, program);
}

#[test]
fn test_name_serializes_as_string() {
    let name = Name::new("Acc").unwrap();
    assert_eq!(serde_json::to_string(&name).unwrap(), "\"Acc\"");
}

#[test]
fn test_empty_name_is_rejected() {
    assert!(serde_json::from_str::<Name>("\"\"").is_err());
}

#[test]
fn test_empty_non_empty_is_rejected() {
    let json = r#"{"declarations":[{"Type":{"name":"T","fields":[],"range":[0,1]}}]}"#;
    assert!(serde_json::from_str::<Program>(json).is_err());
}
