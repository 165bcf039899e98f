//! Precedence, associativity and shape of value expressions and conditions

use rstest::rstest;
use scl::parser::{
    BinaryOp, ErrorCode, Expr, Literal, QuantifierKind, Rule, RuleNode, TlaExpr, parse_rule,
};
use scl::syntax::{expr_to_sexpr, tla_to_sexpr};

fn expr(source: &str) -> Expr {
    match parse_rule(Rule::Expr, source) {
        Ok(RuleNode::Expr(expr)) => expr,
        other => panic!("{source:?}: {other:?}"),
    }
}

fn condition(source: &str) -> TlaExpr {
    match parse_rule(Rule::Condition, source) {
        Ok(RuleNode::Condition(condition)) => condition,
        other => panic!("{source:?}: {other:?}"),
    }
}

#[rstest]
#[case("1 + 2 * 3", "(+ 1 (* 2 3))")]
#[case("a - b - c", "(- (- a b) c)")]
#[case("a / b * c", "(* (/ a b) c)")]
#[case("(1 + 2) * 3", "(* (+ 1 2) 3)")]
#[case("a + 1 < b * 2", "(< (+ a 1) (* b 2))")]
#[case("a < b = c > d", "(= (< a b) (> c d))")]
#[case("a == b", "(= a b)")]
#[case("a # b", "(!= a b)")]
#[case("a != b", "(!= a b)")]
#[case("-a * b", "(* (- a) b)")]
#[case("!!a", "(! (! a))")]
#[case("-(a + b)", "(- (+ a b))")]
#[case("x.f + 1", "(+ (. x f) 1)")]
#[case("{ a: 1, b: x.y }", "(struct (a 1) (b (. x y)))")]
#[case("\"hi\\n\"", "\"hi\\n\"")]
#[case("null", "null")]
fn test_expression_shape(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(expr_to_sexpr(&expr(source)), expected);
}

#[rstest]
#[case("a \\/ b /\\ c", "(\\/ a (/\\ b c))")]
#[case("a /\\ b \\/ c", "(\\/ (/\\ a b) c)")]
#[case("a => b \\/ c", "(=> a (\\/ b c))")]
#[case("a => b => c", "(=> (=> a b) c)")]
#[case("~a /\\ b", "(/\\ (~ a) b)")]
#[case("~(a /\\ b)", "(~ (/\\ a b))")]
#[case("(a + b) * c = d /\\ e", "(/\\ (= (* (+ a b) c) d) e)")]
#[case("x.f = 1 /\\ y.g > 2", "(/\\ (= (. x f) 1) (> (. y g) 2))")]
fn test_condition_shape(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(tla_to_sexpr(&condition(source)), expected);
}

#[test]
fn test_existential_quantifier() {
    let parsed = condition("\\E Relation R x by k : x.f = 1");
    match parsed {
        TlaExpr::Quantifier {
            kind,
            relation,
            var,
            binding,
            body,
        } => {
            assert_eq!(kind, QuantifierKind::Exists);
            assert_eq!(relation, "R");
            assert_eq!(var, "x");
            assert!(matches!(binding, Expr::Identifier(ref name) if name == "k"));
            match body.as_expr() {
                Some(Expr::Binary { op, left, right }) => {
                    assert_eq!(*op, BinaryOp::Eq);
                    assert!(matches!(
                        left.as_ref(),
                        Expr::FieldAccess { object, field } if object == "x" && field == "f"
                    ));
                    assert_eq!(right.as_ref(), &Expr::Literal(Literal::Number(1)));
                }
                other => panic!("unexpected body {other:?}"),
            }
        }
        other => panic!("expected quantifier, got {other:?}"),
    }
}

#[test]
fn test_quantifier_body_extends_right() {
    assert_eq!(
        tla_to_sexpr(&condition("\\A Relation R x by k : a /\\ b")),
        "(\\A R x k (/\\ a b))"
    );
    assert_eq!(
        tla_to_sexpr(&condition("c \\/ \\E Relation R x by k : a /\\ b")),
        "(\\/ c (\\E R x k (/\\ a b)))"
    );
}

#[test]
fn test_nested_field_access_is_rejected() {
    let error = parse_rule(Rule::Expr, "a.b.c").unwrap_err();
    assert_eq!(error.code, ErrorCode::E0403);
}

#[test]
fn test_missing_operand() {
    let error = parse_rule(Rule::Expr, "1 + )").unwrap_err();
    assert_eq!(error.code, ErrorCode::E0402);
}

#[test]
fn test_quantifier_requires_relation_keyword() {
    let error = parse_rule(Rule::Condition, "\\E R x by k : true").unwrap_err();
    assert_eq!(error.code, ErrorCode::E0704);
}

#[test]
fn test_empty_struct_literal_is_rejected() {
    assert!(parse_rule(Rule::Expr, "{}").is_err());
}
