//! Shared helpers for parsing test sources

use scl::parser::{
    ErrorKind, Parse, ParseConfig, ParseError, Program, StateDecl, parse, parse_with_config,
};

/// Parse fail-fast and panic with the errors if any were reported
pub fn parse_ok(source: &str) -> Program {
    let parse = parse(source);
    assert!(
        parse.ok(),
        "expected {source:?} to parse, got errors: {:#?}",
        parse.errors
    );
    parse.program
}

/// Parse fail-fast and return the single error
pub fn parse_err(source: &str) -> ParseError {
    let parse = parse(source);
    assert_eq!(
        parse.errors.len(),
        1,
        "expected exactly one error for {source:?}, got {:#?}",
        parse.errors
    );
    parse.errors.into_iter().next().unwrap()
}

/// Parse with resynchronization
pub fn parse_resync(source: &str) -> Parse {
    parse_with_config(source, &ParseConfig::resynchronizing())
}

/// The only state declared in `source`
pub fn single_state(source: &str) -> StateDecl {
    let program = parse_ok(source);
    let mut states: Vec<StateDecl> = program.states().cloned().collect();
    assert_eq!(states.len(), 1, "expected one state in {source:?}");
    states.remove(0)
}

/// Wrap body items in a minimal state so they can be parsed as a document
pub fn in_state(body: &str) -> String {
    format!("state S uses Acc {{ {body} next {{ otherwise => S }} }}")
}

pub fn kinds(errors: &[ParseError]) -> Vec<ErrorKind> {
    errors.iter().map(|error| error.kind).collect()
}
