//! Statement parsing
//!
//! ```text
//! let n: T = e;
//! select n: T from E [where e] [limit N];
//! foreach x: T in C { stmt* }
//! update E set a = e, ... [where e];
//! insert into E (a, ...) values (e, ...);
//! delete from E [where e];
//! assert e;
//! commit;
//! ```

use super::*;
use crate::parser::ast::{Assignment, Expr, NonEmpty, Statement, StmtKind};
use crate::parser::errors::LexErrorKind;

/// Parse one statement, dispatching on its leading keyword
pub fn parse_statement<P: SclParser>(p: &mut P) -> PResult<Statement> {
    with_context(p, ParseContext::Statement, |p| {
        let start = p.current_range().start();
        let kind = match p.current_kind() {
            SyntaxKind::LET_KW => parse_let(p)?,
            SyntaxKind::SELECT_KW => parse_select(p)?,
            SyntaxKind::FOREACH_KW => parse_foreach(p)?,
            SyntaxKind::UPDATE_KW => parse_update(p)?,
            SyntaxKind::INSERT_KW => parse_insert(p)?,
            SyntaxKind::DELETE_KW => parse_delete(p)?,
            SyntaxKind::ASSERT_KW => {
                p.bump();
                let expr = parse_expr(p)?;
                p.expect(SyntaxKind::SEMICOLON)?;
                StmtKind::Assert { expr }
            }
            SyntaxKind::COMMIT_KW => {
                p.bump();
                p.expect(SyntaxKind::SEMICOLON)?;
                StmtKind::Commit
            }
            _ => return Err(unexpected_in_body(p).into()),
        };
        Ok(Statement {
            kind,
            range: range_from(p, start),
        })
    })
}

/// Statements up to the closing `}` of a `foreach` body (not consumed)
pub fn parse_statement_list<P: SclParser>(p: &mut P) -> PResult<Vec<Statement>> {
    let mut statements = Vec::new();
    while !p.at(SyntaxKind::R_BRACE) && !p.at_eof() {
        let item = p.checkpoint();
        match parse_statement(p) {
            Ok(statement) => statements.push(statement),
            Err(abort) => p.recover(abort, item, STATEMENT_START)?,
        }
    }
    Ok(statements)
}

fn unexpected_in_body<P: SclParser>(p: &P) -> ParseError {
    let error = p.unexpected(STATEMENT_START, ErrorCode::E0701);
    match p.current_kind() {
        SyntaxKind::USE_KW => error.with_hint("'use' statements must come before any other statement"),
        SyntaxKind::PRE_KW | SyntaxKind::PRECONDITION_KW => {
            error.with_hint("the precondition block must come before the statements")
        }
        SyntaxKind::NEXT_KW => error.with_hint("'next' is only allowed as the last element of a state body"),
        _ => error,
    }
}

fn parse_let<P: SclParser>(p: &mut P) -> PResult<StmtKind> {
    p.expect(SyntaxKind::LET_KW)?;
    let name = expect_name(p)?;
    p.expect(SyntaxKind::COLON)?;
    let ty = parse_type(p)?;
    p.expect(SyntaxKind::EQ)?;
    let value = parse_expr(p)?;
    p.expect(SyntaxKind::SEMICOLON)?;
    Ok(StmtKind::Let { name, ty, value })
}

fn parse_select<P: SclParser>(p: &mut P) -> PResult<StmtKind> {
    p.expect(SyntaxKind::SELECT_KW)?;
    let name = expect_name(p)?;
    p.expect(SyntaxKind::COLON)?;
    let ty = parse_type(p)?;
    p.expect(SyntaxKind::FROM_KW)?;
    let entity = expect_name(p)?;
    let where_clause = parse_where_clause(p)?;
    let limit = if p.eat(SyntaxKind::LIMIT_KW) {
        if !p.at(SyntaxKind::NUMBER) {
            return Err(p.unexpected(&[SyntaxKind::NUMBER], ErrorCode::E0902).into());
        }
        let value = p.current_text().parse::<u64>().map_err(|_| {
            ParseError::lex(LexErrorKind::InvalidNumber, p.current_range())
        })?;
        p.bump();
        Some(value)
    } else {
        None
    };
    p.expect(SyntaxKind::SEMICOLON)?;
    Ok(StmtKind::Select {
        name,
        ty,
        entity,
        where_clause,
        limit,
    })
}

fn parse_foreach<P: SclParser>(p: &mut P) -> PResult<StmtKind> {
    p.expect(SyntaxKind::FOREACH_KW)?;
    let item = expect_name(p)?;
    p.expect(SyntaxKind::COLON)?;
    let item_type = parse_type(p)?;
    p.expect(SyntaxKind::IN_KW)?;
    let collection = expect_name(p)?;
    p.expect(SyntaxKind::L_BRACE)?;
    let body = with_context(p, ParseContext::ForeachBody, parse_statement_list)?;
    p.expect(SyntaxKind::R_BRACE)?;
    Ok(StmtKind::Foreach {
        item,
        item_type,
        collection,
        body,
    })
}

fn parse_update<P: SclParser>(p: &mut P) -> PResult<StmtKind> {
    p.expect(SyntaxKind::UPDATE_KW)?;
    let entity = expect_name(p)?;
    p.expect(SyntaxKind::SET_KW)?;
    let first = parse_assignment(p)?;
    let mut rest = Vec::new();
    while p.eat(SyntaxKind::COMMA) {
        rest.push(parse_assignment(p)?);
    }
    let where_clause = parse_where_clause(p)?;
    p.expect(SyntaxKind::SEMICOLON)?;
    Ok(StmtKind::Update {
        entity,
        assignments: NonEmpty::from_parts(first, rest),
        where_clause,
    })
}

fn parse_assignment<P: SclParser>(p: &mut P) -> PResult<Assignment> {
    let field = expect_name(p)?;
    p.expect(SyntaxKind::EQ)?;
    let value = parse_expr(p)?;
    Ok(Assignment { field, value })
}

fn parse_insert<P: SclParser>(p: &mut P) -> PResult<StmtKind> {
    p.expect(SyntaxKind::INSERT_KW)?;
    p.expect(SyntaxKind::INTO_KW)?;
    let entity = expect_name(p)?;

    p.expect(SyntaxKind::L_PAREN)?;
    let mut columns = Vec::new();
    if !p.at(SyntaxKind::R_PAREN) {
        columns.push(expect_name(p)?);
        while p.eat(SyntaxKind::COMMA) {
            columns.push(expect_name(p)?);
        }
    }
    p.expect(SyntaxKind::R_PAREN)?;

    p.expect(SyntaxKind::VALUES_KW)?;
    p.expect(SyntaxKind::L_PAREN)?;
    let mut values = Vec::new();
    if !p.at(SyntaxKind::R_PAREN) {
        values.push(parse_expr(p)?);
        while p.eat(SyntaxKind::COMMA) {
            values.push(parse_expr(p)?);
        }
    }
    p.expect(SyntaxKind::R_PAREN)?;
    p.expect(SyntaxKind::SEMICOLON)?;

    Ok(StmtKind::Insert {
        entity,
        columns,
        values,
    })
}

fn parse_delete<P: SclParser>(p: &mut P) -> PResult<StmtKind> {
    p.expect(SyntaxKind::DELETE_KW)?;
    p.expect(SyntaxKind::FROM_KW)?;
    let entity = expect_name(p)?;
    let where_clause = parse_where_clause(p)?;
    p.expect(SyntaxKind::SEMICOLON)?;
    Ok(StmtKind::Delete {
        entity,
        where_clause,
    })
}

/// `[where expr]`; absence means unconstrained
fn parse_where_clause<P: SclParser>(p: &mut P) -> PResult<Option<Expr>> {
    if p.eat(SyntaxKind::WHERE_KW) {
        Ok(Some(parse_expr(p)?))
    } else {
        Ok(None)
    }
}
