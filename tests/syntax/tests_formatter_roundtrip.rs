//! Formatting is a fixed point of parsing

use crate::helpers::parse_helpers::parse_ok;
use crate::helpers::source_fixtures::ALL_FIXTURES;
use proptest::prelude::*;
use rstest::rstest;
use scl::parser::{
    BinaryOp, Expr, Literal, Name, NonEmpty, QuantifierKind, StmtKind, StructField, TlaBinaryOp,
    TlaExpr, UnaryOp,
};
use scl::syntax::{FormatOptions, format, format_program, to_sexpr};
use smol_str::SmolStr;

#[rstest]
fn test_fixture_is_fixed_point(#[values(0, 1, 2, 3, 4, 5)] index: usize) {
    let source = ALL_FIXTURES[index];
    let program = parse_ok(source);
    let formatted = format_program(&program, &FormatOptions::default());
    let reparsed = parse_ok(&formatted);
    assert_eq!(to_sexpr(&reparsed), to_sexpr(&program), "formatted:\n{formatted}");
    assert_eq!(format_program(&reparsed, &FormatOptions::default()), formatted);
}

#[test]
fn test_format_with_tabs_reparses() {
    let options = FormatOptions {
        insert_spaces: false,
        ..FormatOptions::default()
    };
    for source in ALL_FIXTURES {
        let formatted = format(source, &options).unwrap();
        assert_eq!(to_sexpr(&parse_ok(&formatted)), to_sexpr(&parse_ok(source)));
    }
}

// =============================================================================
// Generated trees
// =============================================================================

fn name() -> impl Strategy<Value = Name> {
    prop::sample::select(vec!["a", "b", "acc", "x1", "total", "limit", "from"])
        .prop_map(|text| Name::new(text).unwrap())
}

fn literal() -> impl Strategy<Value = Literal> {
    prop_oneof![
        any::<u64>().prop_map(Literal::Number),
        "[a-z ]{0,6}".prop_map(|text| Literal::String(SmolStr::new(text))),
        any::<bool>().prop_map(Literal::Boolean),
        Just(Literal::Null),
    ]
}

fn binary_op() -> impl Strategy<Value = BinaryOp> {
    prop::sample::select(vec![
        BinaryOp::Eq,
        BinaryOp::Neq,
        BinaryOp::Lt,
        BinaryOp::Le,
        BinaryOp::Gt,
        BinaryOp::Ge,
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
    ])
}

fn expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        name().prop_map(Expr::Identifier),
        literal().prop_map(Expr::Literal),
        (name(), name()).prop_map(|(object, field)| Expr::FieldAccess { object, field }),
    ];
    leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (binary_op(), inner.clone(), inner.clone())
                .prop_map(|(op, left, right)| Expr::binary(op, left, right)),
            (prop::sample::select(vec![UnaryOp::Not, UnaryOp::Neg]), inner.clone())
                .prop_map(|(op, operand)| Expr::unary(op, operand)),
            prop::collection::vec((name(), inner), 1..3).prop_map(|fields| {
                let fields = fields
                    .into_iter()
                    .map(|(name, value)| StructField { name, value })
                    .collect();
                Expr::StructLiteral {
                    fields: NonEmpty::new(fields).unwrap(),
                }
            }),
        ]
    })
}

fn condition() -> impl Strategy<Value = TlaExpr> {
    let leaf = expr().prop_map(TlaExpr::Expr);
    leaf.prop_recursive(3, 12, 2, |inner| {
        prop_oneof![
            (
                prop::sample::select(vec![TlaBinaryOp::And, TlaBinaryOp::Or, TlaBinaryOp::Implies]),
                inner.clone(),
                inner.clone()
            )
                .prop_map(|(op, left, right)| TlaExpr::binary(op, left, right)),
            inner.clone().prop_map(TlaExpr::not),
            (
                prop::sample::select(vec![QuantifierKind::Exists, QuantifierKind::ForAll]),
                name(),
                name(),
                expr(),
                inner
            )
                .prop_map(|(kind, relation, var, binding, body)| TlaExpr::Quantifier {
                    kind,
                    relation,
                    var,
                    binding,
                    body: Box::new(body),
                }),
        ]
    })
}

proptest! {
    #[test]
    fn printed_expression_reparses_to_same_tree(value in expr()) {
        let source = format!("state S uses A {{ assert {value}; next {{ otherwise => S }} }}");
        let program = parse_ok(&source);
        let state = program.states().next().unwrap();
        match &state.body[0].kind {
            StmtKind::Assert { expr: parsed } => prop_assert_eq!(parsed, &value),
            other => prop_assert!(false, "expected assert, got {:?}", other),
        }
    }

    #[test]
    fn printed_condition_reparses_to_same_tree(cond in condition()) {
        let source = format!(
            "state S uses A {{ pre {{ {cond}; }} next {{ when ({cond}) => S }} }}"
        );
        let program = parse_ok(&source);
        let state = program.states().next().unwrap();
        let precondition = state.precondition.as_ref().unwrap();
        prop_assert_eq!(precondition.conditions.first(), &cond);
        prop_assert_eq!(state.next.cases[0].condition(), Some(&cond));
    }

    #[test]
    fn formatting_is_idempotent(cond in condition(), value in expr()) {
        let source = format!(
            "state S uses A {{ pre {{ {cond}; }} let v: int = {value}; next {{ when ({cond}) => S otherwise => S }} }}"
        );
        let once = format(&source, &FormatOptions::default()).unwrap();
        let twice = format(&once, &FormatOptions::default()).unwrap();
        prop_assert_eq!(once, twice);
    }
}
