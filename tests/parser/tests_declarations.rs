//! Type, context and state declarations

use crate::helpers::parse_helpers::{parse_err, parse_ok, single_state};
use crate::helpers::source_fixtures::*;
use rstest::rstest;
use scl::parser::{
    Declaration, ErrorCode, ErrorKind, NextCase, PreconditionKeyword, PrimitiveType, StmtKind,
    Type, UseStmt,
};

#[test]
fn test_simple_type_declaration() {
    let program = parse_ok(SIMPLE_TYPE);
    assert_eq!(program.declarations.len(), 1);
    let Declaration::Type(decl) = &program.declarations[0] else {
        panic!("expected a type declaration");
    };
    assert_eq!(decl.name, "Acc");
    assert_eq!(decl.fields.len(), 1);
    assert_eq!(decl.fields[0].name, "bal");
    assert_eq!(decl.fields[0].ty, Type::Primitive(PrimitiveType::Int));
}

#[test]
fn test_empty_type_is_rejected() {
    let error = parse_err("type T {}");
    assert_eq!(error.code, ErrorCode::E0206);
}

#[test]
fn test_empty_context_is_accepted() {
    let program = parse_ok(EMPTY_CONTEXT);
    let context = program.contexts().next().unwrap();
    assert_eq!(context.name, "C");
    assert!(context.fields.is_empty());
}

#[test]
fn test_empty_document() {
    assert!(parse_ok("").declarations.is_empty());
    assert!(parse_ok("  // nothing here\n").declarations.is_empty());
}

#[test]
fn test_assert_state() {
    let state = single_state(ASSERT_STATE);
    assert_eq!(state.body.len(), 1);
    assert!(matches!(state.body[0].kind, StmtKind::Assert { .. }));
    assert_eq!(state.next.cases.len(), 1);
    assert!(matches!(
        &state.next.cases[0],
        NextCase::Otherwise { target, export: None, .. } if target == "S"
    ));
}

#[test]
fn test_full_state() {
    let program = parse_ok(BANKING);
    assert_eq!(program.types().count(), 2);
    assert_eq!(program.contexts().count(), 1);

    let state = program.states().next().unwrap();
    assert_eq!(state.name, "Withdraw");
    let uses: Vec<&str> = state.uses.iter().map(|name| name.as_str()).collect();
    assert_eq!(uses, vec!["Account", "Entry"]);

    assert_eq!(state.use_stmts.len(), 3);
    match &state.use_stmts[0] {
        UseStmt::State { source, fields } => {
            assert_eq!(source.namespace.as_deref(), Some("bank"));
            assert_eq!(source.name, "Open");
            assert_eq!(fields.len(), 1);
        }
        other => panic!("expected 'use state', got {other:?}"),
    }
    assert!(matches!(&state.use_stmts[1], UseStmt::Context { context } if !context.is_namespaced()));
    assert!(matches!(&state.use_stmts[2], UseStmt::Type { ty } if ty.is_namespaced()));

    let precondition = state.precondition.as_ref().unwrap();
    assert_eq!(precondition.keyword, PreconditionKeyword::Precondition);
    assert_eq!(precondition.conditions.len(), 2);

    let keywords: Vec<&str> = state.body.iter().map(|s| s.kind.keyword()).collect();
    assert_eq!(
        keywords,
        vec!["let", "select", "foreach", "update", "insert", "delete", "assert", "commit"]
    );

    let targets: Vec<&str> = state.next.cases.iter().map(|c| c.target().as_str()).collect();
    assert_eq!(targets, vec!["Review", "Withdraw", "Done"]);
    assert!(state.next.cases[0].export().is_some());
}

#[test]
fn test_repeated_otherwise_cases_are_kept() {
    let state = single_state("state S uses A { next { otherwise => X otherwise => Y } }");
    let targets: Vec<&str> = state.next.cases.iter().map(|c| c.target().as_str()).collect();
    assert_eq!(targets, vec!["X", "Y"]);
}

#[test]
fn test_missing_next_block() {
    let error = parse_err("state S uses T { let x: int = 1; }");
    assert_eq!(error.kind, ErrorKind::MissingRequiredElement);
    assert_eq!(error.code, ErrorCode::E0306);
    assert!(error.hint.is_some());
}

#[rstest]
#[case("state S { next { otherwise => S } }", ErrorCode::E0303)]
#[case("state S uses A { next { } }", ErrorCode::E0206)]
#[case("state S uses A { next { when x => } }", ErrorCode::E0301)]
#[case("state S uses A { next { otherwise S } }", ErrorCode::E0703)]
#[case("state S uses A { next { then => S } }", ErrorCode::E0702)]
#[case("state S uses A { use thing X; next { otherwise => S } }", ErrorCode::E0501)]
#[case("state S uses A { use state X {} next { otherwise => S } }", ErrorCode::E0206)]
#[case("state S uses A { pre {} next { otherwise => S } }", ErrorCode::E0206)]
#[case("state S uses A { commit; use type X; next { otherwise => S } }", ErrorCode::E0701)]
#[case("widget W {}", ErrorCode::E0302)]
#[case("type T { a: ; }", ErrorCode::E0305)]
fn test_declaration_errors(#[case] source: &str, #[case] code: ErrorCode) {
    assert_eq!(parse_err(source).code, code, "{source}");
}

#[test]
fn test_keyword_as_name_has_hint() {
    let error = parse_err("type commit { a: int; }");
    assert_eq!(error.code, ErrorCode::E0301);
    assert_eq!(error.kind, ErrorKind::UnexpectedToken);
}

#[test]
fn test_unclosed_state_reports_end_of_input() {
    let error = parse_err("state S uses A { next { otherwise => S }");
    assert_eq!(error.kind, ErrorKind::UnexpectedEndOfInput);
    assert_eq!(error.related.len(), 1);
}

#[rstest]
#[case("from")]
#[case("in")]
#[case("set")]
#[case("into")]
#[case("values")]
#[case("where")]
#[case("limit")]
#[case("by")]
#[case("Relation")]
#[case("export")]
#[case("pre")]
#[case("precondition")]
#[case("uses")]
fn test_clause_keyword_as_field_name(#[case] word: &str) {
    let program = parse_ok(&format!("type T {{ {word}: int; }} context C {{ {word}: {word}; }}"));
    let Declaration::Type(decl) = &program.declarations[0] else {
        panic!("expected a type declaration");
    };
    assert_eq!(decl.fields[0].name, word);
    let Declaration::Context(context) = &program.declarations[1] else {
        panic!("expected a context declaration");
    };
    assert_eq!(context.fields[0].ty, Type::Named(scl::parser::Name::new(word).unwrap()));
}

#[test]
fn test_clause_keywords_in_state() {
    let state = single_state(
        "state Page uses from {
            use state \"db\"::values { limit: int; }
            pre { where > 0; }
            select limit: Page from values where limit.by = 1 limit 3;
            update set set where = where + 1 where by > 0;
            insert into into (values, from) values (1, limit);
            next { when in => export { export pre: int; } }
        }",
    );
    assert_eq!(state.uses[0], "from");
    assert_eq!(state.body.len(), 3);
    let NextCase::When { target, export, .. } = &state.next.cases[0] else {
        panic!("expected a when case");
    };
    assert_eq!(target, "export");
    assert_eq!(export.as_ref().map(|e| e.fields[0].name.as_str()), Some("pre"));
}

#[rstest]
#[case("type true { a: int; }")]
#[case("type T { null: int; }")]
#[case("type T { commit: int; }")]
#[case("context state {}")]
fn test_reserved_words_stay_reserved(#[case] source: &str) {
    assert_eq!(parse_err(source).code, ErrorCode::E0301, "{source}");
}
