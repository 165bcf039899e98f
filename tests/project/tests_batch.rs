//! Parallel batch parsing

use crate::helpers::source_fixtures::ALL_FIXTURES;
use scl::parser::{ParseConfig, parse};
use scl::project::{SourceText, parse_batch};

#[test]
fn test_batch_matches_sequential_parse() {
    let sources: Vec<SourceText> = ALL_FIXTURES
        .iter()
        .enumerate()
        .map(|(i, text)| SourceText::new(format!("fixture{i}.scl"), *text))
        .collect();
    let results = parse_batch(&sources, &ParseConfig::default());
    assert_eq!(results.len(), ALL_FIXTURES.len());
    for (result, text) in results.iter().zip(ALL_FIXTURES) {
        assert!(result.ok(), "{}: {:?}", result.name, result.parse.errors);
        assert_eq!(result.parse, parse(text));
    }
}

#[test]
fn test_batch_uses_given_recovery() {
    let sources = vec![SourceText::new(
        "two_errors.scl",
        "type A { x: ; } type B { y: ; }",
    )];
    let fail_fast = parse_batch(&sources, &ParseConfig::default());
    assert_eq!(fail_fast[0].parse.errors.len(), 1);
    let resync = parse_batch(&sources, &ParseConfig::resynchronizing());
    assert_eq!(resync[0].parse.errors.len(), 2);
}
