//! Top-level declarations and state bodies
//!
//! ```text
//! program      = (type_decl | context_decl | state_decl)*
//! type_decl    = 'type' Name '{' field+ '}'
//! context_decl = 'context' Name '{' field* '}'
//! state_decl   = 'state' Name 'uses' Name (',' Name)* '{'
//!                    use_stmt* precondition? statement* next_block
//!                '}'
//! next_block   = 'next' '{' ('when' cond '=>' Name export? | 'otherwise' '=>' Name export?)+ '}'
//! export       = '{' 'export' field+ '}'
//! ```

use super::expressions::parse_guard;
use super::statements::parse_statement;
use super::types::parse_fields;
use super::*;
use crate::parser::ast::{
    ContextDecl, Declaration, ExportBlock, NextBlock, NextCase, NonEmpty, PreconditionBlock,
    PreconditionKeyword, Program, StateDecl, TypeDecl, UseStmt,
};

/// Parse declarations until the end of input
///
/// Tokens that cannot start a declaration are reported and, when recovering,
/// skipped up to the next declaration keyword.
pub fn parse_program<P: SclParser>(p: &mut P) -> PResult<Program> {
    let mut declarations = Vec::new();
    while !p.at_eof() {
        let item = p.checkpoint();
        match parse_declaration(p) {
            Ok(decl) => {
                tracing::trace!(name = %decl.name(), "parsed declaration");
                declarations.push(decl);
            }
            Err(abort) => p.recover(abort, item, DECLARATION_START)?,
        }
    }
    Ok(Program { declarations })
}

/// Parse one `type`, `context` or `state` declaration
pub fn parse_declaration<P: SclParser>(p: &mut P) -> PResult<Declaration> {
    match p.current_kind() {
        SyntaxKind::TYPE_KW => parse_type_decl(p).map(Declaration::Type),
        SyntaxKind::CONTEXT_KW => parse_context_decl(p).map(Declaration::Context),
        SyntaxKind::STATE_KW => parse_state_decl(p).map(Declaration::State),
        _ => Err(p
            .unexpected(DECLARATION_START, ErrorCode::E0302)
            .with_hint("declarations start with 'type', 'context' or 'state'")
            .into()),
    }
}

fn parse_type_decl<P: SclParser>(p: &mut P) -> PResult<TypeDecl> {
    let start = p.current_range().start();
    p.expect(SyntaxKind::TYPE_KW)?;
    let name = expect_name(p)?;
    with_context(p, ParseContext::TypeDecl, |p| {
        p.expect(SyntaxKind::L_BRACE)?;
        let errors_before = p.error_count();
        let fields = parse_fields(p)?;
        let fields = close_non_empty(
            p,
            fields,
            errors_before,
            &[SyntaxKind::IDENT],
            "a type declaration needs at least one field",
        )?;
        Ok(TypeDecl {
            name,
            fields,
            range: range_from(p, start),
        })
    })
}

fn parse_context_decl<P: SclParser>(p: &mut P) -> PResult<ContextDecl> {
    let start = p.current_range().start();
    p.expect(SyntaxKind::CONTEXT_KW)?;
    let name = expect_name(p)?;
    with_context(p, ParseContext::ContextDecl, |p| {
        p.expect(SyntaxKind::L_BRACE)?;
        let fields = parse_fields(p)?;
        p.expect(SyntaxKind::R_BRACE)?;
        Ok(ContextDecl {
            name,
            fields,
            range: range_from(p, start),
        })
    })
}

// ============================================================================
// STATE
// ============================================================================

fn parse_state_decl<P: SclParser>(p: &mut P) -> PResult<StateDecl> {
    let start = p.current_range().start();
    let (name, uses) = with_context(p, ParseContext::StateHeader, |p| {
        p.expect(SyntaxKind::STATE_KW)?;
        let name = expect_name(p)?;
        if !p.eat(SyntaxKind::USES_KW) {
            let error = p
                .unexpected(&[SyntaxKind::USES_KW], ErrorCode::E0303)
                .with_hint(format!("a state names the entities it operates over: 'state {name} uses Entity {{ ... }}'"));
            return Err(error.into());
        }
        let first = expect_name(p)?;
        let mut rest = Vec::new();
        while p.eat(SyntaxKind::COMMA) {
            rest.push(expect_name(p)?);
        }
        p.expect(SyntaxKind::L_BRACE)?;
        Ok((name, NonEmpty::from_parts(first, rest)))
    })?;

    with_context(p, ParseContext::StateBody, |p| {
        let mut use_stmts = Vec::new();
        while p.at(SyntaxKind::USE_KW) {
            let item = p.checkpoint();
            match parse_use_stmt(p) {
                Ok(stmt) => use_stmts.push(stmt),
                Err(abort) => p.recover(abort, item, STATE_BODY_START)?,
            }
        }

        let mut precondition = None;
        if p.at_any(&[SyntaxKind::PRECONDITION_KW, SyntaxKind::PRE_KW]) {
            let item = p.checkpoint();
            match parse_precondition(p) {
                Ok(block) => precondition = Some(block),
                Err(abort) => p.recover(abort, item, STATE_BODY_START)?,
            }
        }

        let mut body = Vec::new();
        while !p.at_any(&[SyntaxKind::NEXT_KW, SyntaxKind::R_BRACE]) && !p.at_eof() {
            let item = p.checkpoint();
            match parse_statement(p) {
                Ok(statement) => body.push(statement),
                Err(abort) => p.recover(abort, item, BODY_STATEMENT_START)?,
            }
        }

        if p.at(SyntaxKind::R_BRACE) {
            let error = p
                .missing(ErrorCode::E0306, "state body must end with a 'next' block")
                .with_hint(format!("add 'next {{ otherwise => {name} }}' before the closing '}}'"));
            return Err(error.into());
        }
        let item = p.checkpoint();
        let next = match parse_next_block(p) {
            Ok(next) => Some(next),
            Err(abort) => {
                p.recover(abort, item, &[])?;
                None
            }
        };
        p.expect(SyntaxKind::R_BRACE)?;

        let next = next.ok_or(Abort::Recovered)?;
        Ok(StateDecl {
            name,
            uses,
            use_stmts,
            precondition,
            body,
            next,
            range: range_from(p, start),
        })
    })
}

/// `use state Q { field+ }`, `use context Q;` or `use type Q;`
fn parse_use_stmt<P: SclParser>(p: &mut P) -> PResult<UseStmt> {
    with_context(p, ParseContext::UseStatement, |p| {
        p.expect(SyntaxKind::USE_KW)?;
        match p.current_kind() {
            SyntaxKind::STATE_KW => {
                p.bump();
                let source = parse_qualified_name(p)?;
                p.expect(SyntaxKind::L_BRACE)?;
                let errors_before = p.error_count();
                let fields = parse_fields(p)?;
                let fields = close_non_empty(
                    p,
                    fields,
                    errors_before,
                    &[SyntaxKind::IDENT],
                    "'use state' needs at least one field",
                )?;
                Ok(UseStmt::State { source, fields })
            }
            SyntaxKind::CONTEXT_KW => {
                p.bump();
                let context = parse_qualified_name(p)?;
                p.expect(SyntaxKind::SEMICOLON)?;
                Ok(UseStmt::Context { context })
            }
            SyntaxKind::TYPE_KW => {
                p.bump();
                let ty = parse_qualified_name(p)?;
                p.expect(SyntaxKind::SEMICOLON)?;
                Ok(UseStmt::Type { ty })
            }
            _ => Err(p
                .unexpected(
                    &[SyntaxKind::STATE_KW, SyntaxKind::CONTEXT_KW, SyntaxKind::TYPE_KW],
                    ErrorCode::E0501,
                )
                .into()),
        }
    })
}

/// `precondition { cond; ... }` or `pre { cond; ... }`
fn parse_precondition<P: SclParser>(p: &mut P) -> PResult<PreconditionBlock> {
    with_context(p, ParseContext::Precondition, |p| {
        let keyword = if p.eat(SyntaxKind::PRE_KW) {
            PreconditionKeyword::Pre
        } else {
            p.expect(SyntaxKind::PRECONDITION_KW)?;
            PreconditionKeyword::Precondition
        };
        p.expect(SyntaxKind::L_BRACE)?;

        let errors_before = p.error_count();
        let mut conditions = Vec::new();
        while !p.at(SyntaxKind::R_BRACE) && !p.at_eof() {
            let item = p.checkpoint();
            let condition = parse_condition(p).and_then(|condition| {
                p.expect(SyntaxKind::SEMICOLON)?;
                Ok(condition)
            });
            match condition {
                Ok(condition) => conditions.push(condition),
                Err(abort) => p.recover(abort, item, &[])?,
            }
        }
        let conditions = close_non_empty(
            p,
            conditions,
            errors_before,
            &[SyntaxKind::TILDE, SyntaxKind::EXISTS, SyntaxKind::FORALL, SyntaxKind::IDENT],
            "a precondition block needs at least one condition",
        )?;
        Ok(PreconditionBlock {
            keyword,
            conditions,
        })
    })
}

// ============================================================================
// TRANSITIONS
// ============================================================================

fn parse_next_block<P: SclParser>(p: &mut P) -> PResult<NextBlock> {
    with_context(p, ParseContext::NextBlock, |p| {
        p.expect(SyntaxKind::NEXT_KW)?;
        p.expect(SyntaxKind::L_BRACE)?;

        let errors_before = p.error_count();
        let mut cases = Vec::new();
        while !p.at(SyntaxKind::R_BRACE) && !p.at_eof() {
            let item = p.checkpoint();
            match parse_next_case(p) {
                Ok(case) => cases.push(case),
                Err(abort) => p.recover(abort, item, NEXT_CASE_START)?,
            }
        }
        let cases = close_non_empty(
            p,
            cases,
            errors_before,
            NEXT_CASE_START,
            "a 'next' block needs at least one 'when' or 'otherwise' case",
        )?;
        Ok(NextBlock { cases })
    })
}

fn parse_next_case<P: SclParser>(p: &mut P) -> PResult<NextCase> {
    let start = p.current_range().start();
    match p.current_kind() {
        SyntaxKind::WHEN_KW => {
            p.bump();
            let condition = parse_guard(p)?;
            expect_arrow(p)?;
            let target = expect_name(p)?;
            let export = parse_optional_export(p)?;
            Ok(NextCase::When {
                condition,
                target,
                export,
                range: range_from(p, start),
            })
        }
        SyntaxKind::OTHERWISE_KW => {
            p.bump();
            expect_arrow(p)?;
            let target = expect_name(p)?;
            let export = parse_optional_export(p)?;
            Ok(NextCase::Otherwise {
                target,
                export,
                range: range_from(p, start),
            })
        }
        _ => Err(p.unexpected(NEXT_CASE_START, ErrorCode::E0702).into()),
    }
}

fn expect_arrow<P: SclParser>(p: &mut P) -> PResult<()> {
    if p.eat(SyntaxKind::FAT_ARROW) {
        return Ok(());
    }
    let error = p
        .unexpected(&[SyntaxKind::FAT_ARROW], ErrorCode::E0703)
        .with_hint("a transition is written 'when <condition> => Target'");
    Err(error.into())
}

/// `{ export field: type; ... }` after a transition target
fn parse_optional_export<P: SclParser>(p: &mut P) -> PResult<Option<ExportBlock>> {
    if !p.at(SyntaxKind::L_BRACE) {
        return Ok(None);
    }
    with_context(p, ParseContext::ExportBlock, |p| {
        p.expect(SyntaxKind::L_BRACE)?;
        p.expect(SyntaxKind::EXPORT_KW)?;
        let errors_before = p.error_count();
        let fields = parse_fields(p)?;
        let fields = close_non_empty(
            p,
            fields,
            errors_before,
            &[SyntaxKind::IDENT],
            "an export block needs at least one field",
        )?;
        Ok(Some(ExportBlock { fields }))
    })
}
