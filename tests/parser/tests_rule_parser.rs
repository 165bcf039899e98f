//! Parsing individual grammar rules

use rstest::rstest;
use scl::parser::{ErrorCode, ErrorKind, Rule, RuleNode, Type, parse_rule};

/// Helper to assert that a rule parses successfully
fn assert_rule_parses(rule: Rule, input: &str, desc: &str) {
    let result = parse_rule(rule, input);
    assert!(
        result.is_ok(),
        "Failed to parse {} as {:?}: {:?}\nInput: {}",
        desc,
        rule,
        result.err(),
        input
    );
}

// =============================================================================
// Declarations
// =============================================================================

#[rstest]
#[case("type T { a: int; }", "type with one field")]
#[case("type T { a: int; b: List[T]; c: Map[List[string]]; }", "nested generics")]
#[case("context C {}", "empty context")]
#[case("context C { limit_: float; }", "context with field")]
#[case("state S uses A { next { otherwise => S } }", "minimal state")]
#[case("state S uses A, B, C { pre { true; } next { when x => S otherwise => T } }", "state with pre")]
#[case("state S uses A { use state \"ns\"::Src { f: int; g: bool; } next { otherwise => S } }", "use state")]
fn test_declaration(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::Declaration, input, desc);
}

// =============================================================================
// Statements
// =============================================================================

#[rstest]
#[case("let x: int = 1;", "let")]
#[case("select a: A from A where a.x = 1 limit 5;", "select")]
#[case("foreach a: A in as_ { commit; }", "foreach")]
#[case("update A set x = 1;", "update")]
#[case("insert into A (x) values (1);", "insert")]
#[case("delete from A;", "delete")]
#[case("assert { a: 1 } = b;", "assert struct literal")]
#[case("commit;", "commit")]
fn test_statement(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::Statement, input, desc);
}

// =============================================================================
// Conditions
// =============================================================================

#[rstest]
#[case("a", "bare value")]
#[case("~a", "negation")]
#[case("a /\\ b \\/ c => d", "all connectives")]
#[case("\\A Relation R r by r.id : r.ok", "universal")]
#[case("(\\E Relation R r by 1 : r.ok) /\\ x", "parenthesized quantifier")]
#[case("(a + b) * c > 0", "parenthesized value")]
fn test_condition(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::Condition, input, desc);
}

// =============================================================================
// Types and names
// =============================================================================

#[test]
fn test_type_rule() {
    match parse_rule(Rule::Type, "List[Acc]").unwrap() {
        RuleNode::Type(Type::Generic { base, param }) => {
            assert_eq!(base, "List");
            assert!(matches!(*param, Type::Named(ref name) if name == "Acc"));
        }
        other => panic!("unexpected node {other:?}"),
    }
}

#[test]
fn test_qualified_name_rule() {
    match parse_rule(Rule::QualifiedName, "\"bank\"::Account").unwrap() {
        RuleNode::QualifiedName(name) => {
            assert_eq!(name.namespace.as_deref(), Some("bank"));
            assert_eq!(name.name, "Account");
        }
        other => panic!("unexpected node {other:?}"),
    }
}

#[rstest]
#[case(Rule::QualifiedName, "\"bank\" Account", ErrorCode::E0502)]
#[case(Rule::Type, "List[]", ErrorCode::E0305)]
#[case(Rule::Type, "List[int", ErrorCode::E0207)]
#[case(Rule::Expr, "a b", ErrorCode::E0901)]
#[case(Rule::Statement, "commit; commit;", ErrorCode::E0901)]
fn test_rule_errors(#[case] rule: Rule, #[case] input: &str, #[case] code: ErrorCode) {
    let error = parse_rule(rule, input).unwrap_err();
    assert_eq!(error.code, code, "{input}");
}

#[test]
fn test_trailing_input_is_unexpected_token() {
    let error = parse_rule(Rule::Expr, "1 2").unwrap_err();
    assert_eq!(error.kind, ErrorKind::UnexpectedToken);
    assert_eq!(usize::from(error.range.start()), 2);
}
