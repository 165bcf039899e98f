//! Statements inside a state body

use crate::helpers::parse_helpers::{in_state, parse_err, single_state};
use rstest::rstest;
use scl::parser::{ErrorCode, Expr, Literal, PrimitiveType, StmtKind, Type};
use scl::syntax::sexpr::statement_to_sexpr;

fn statement(source: &str) -> StmtKind {
    let state = single_state(&in_state(source));
    assert_eq!(state.body.len(), 1, "{source}");
    state.body.into_iter().next().unwrap().kind
}

#[rstest]
#[case("let x: int = 1 + 2;", "(let x int (+ 1 2))")]
#[case("let xs: List[Acc] = other;", "(let xs (List Acc) other)")]
#[case("select a: Acc from Acc;", "(select a Acc Acc)")]
#[case("select a: Acc from Acc where a.bal > 0 limit 10;", "(select a Acc Acc (where (> (. a bal) 0)) (limit 10))")]
#[case("foreach a: Acc in accs { }", "(foreach a Acc accs (body))")]
#[case("foreach a: Acc in accs { commit; assert a.ok; }", "(foreach a Acc accs (body (commit) (assert (. a ok))))")]
#[case("update Acc set bal = 0;", "(update Acc (set (bal 0)))")]
#[case("update Acc set bal = bal + 1, n = \"x\" where id = 3;", "(update Acc (set (bal (+ bal 1)) (n \"x\")) (where (= id 3)))")]
#[case("insert into Acc () values ();", "(insert Acc () ())")]
#[case("insert into Acc (id, bal) values (1, -5);", "(insert Acc (id bal) (1 (- 5)))")]
#[case("delete from Acc;", "(delete Acc)")]
#[case("delete from Acc where bal < 0;", "(delete Acc (where (< bal 0)))")]
#[case("assert true;", "(assert true)")]
#[case("commit;", "(commit)")]
fn test_statement_shape(#[case] source: &str, #[case] expected: &str) {
    let state = single_state(&in_state(source));
    assert_eq!(statement_to_sexpr(&state.body[0]), expected);
}

#[test]
fn test_let_fields() {
    match statement("let total: float = 0;") {
        StmtKind::Let { name, ty, value } => {
            assert_eq!(name, "total");
            assert_eq!(ty, Type::Primitive(PrimitiveType::Float));
            assert_eq!(value, Expr::Literal(Literal::Number(0)));
        }
        other => panic!("expected let, got {other:?}"),
    }
}

#[test]
fn test_statement_range_covers_text() {
    let source = in_state("assert x;");
    let state = single_state(&source);
    let range = state.body[0].range;
    assert_eq!(&source[range], "assert x;");
}

#[test]
fn test_insert_counts_are_not_compared() {
    match statement("insert into Acc (a, b) values (1);") {
        StmtKind::Insert {
            columns, values, ..
        } => {
            assert_eq!(columns.len(), 2);
            assert_eq!(values.len(), 1);
        }
        other => panic!("expected insert, got {other:?}"),
    }
}

#[rstest]
#[case("let x = 1;", ErrorCode::E0902)]
#[case("assert x", ErrorCode::E0201)]
#[case("select a: Acc from Acc limit x;", ErrorCode::E0902)]
#[case("update Acc set;", ErrorCode::E0301)]
#[case("foreach a: Acc in accs { next { otherwise => S } }", ErrorCode::E0701)]
#[case("unknown;", ErrorCode::E0701)]
fn test_statement_errors(#[case] source: &str, #[case] code: ErrorCode) {
    let source = in_state(source);
    assert_eq!(parse_err(&source).code, code, "{source}");
}
