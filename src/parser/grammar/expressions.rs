//! Expression parsing for SCL
//!
//! Value expressions and TLA+ conditions share one precedence-climbing
//! engine driven by [`PRECEDENCE`]:
//!
//! ```text
//! TlaExpr:  =>  <  \/  <  /\            (left-assoc), prefix ~ tightest
//! Expr:     = # == !=  <  < <= > >=  <  + -  <  * /   (left-assoc), prefix ! - tightest
//! ```
//!
//! Every value expression is an atom from the condition ladder's point of view.
//! A quantifier `\E|\A Relation R x by k : body` is a condition primary whose
//! body is parsed at the precedence of the position it appears in.

use super::*;
use crate::parser::ast::{
    BinaryOp, Expr, Literal, NonEmpty, QuantifierKind, StructField, TlaBinaryOp, TlaExpr, UnaryOp,
};
use crate::parser::errors::LexErrorKind;
use smol_str::SmolStr;

// ============================================================================
// PRECEDENCE TABLE
// ============================================================================

/// Binding power of each binary operator, plus the prefix level
///
/// Higher numbers bind tighter. The table is read-only data; parsers hold a
/// `&'static` reference to it.
#[derive(Debug)]
pub struct PrecedenceTable {
    tla: &'static [(SyntaxKind, TlaBinaryOp, u8)],
    expr: &'static [(SyntaxKind, BinaryOp, u8)],
    prefix: u8,
}

pub static PRECEDENCE: PrecedenceTable = PrecedenceTable {
    tla: &[
        (SyntaxKind::FAT_ARROW, TlaBinaryOp::Implies, 1),
        (SyntaxKind::TLA_OR, TlaBinaryOp::Or, 2),
        (SyntaxKind::TLA_AND, TlaBinaryOp::And, 3),
    ],
    expr: &[
        (SyntaxKind::EQ, BinaryOp::Eq, 4),
        (SyntaxKind::EQ_EQ, BinaryOp::Eq, 4),
        (SyntaxKind::HASH, BinaryOp::Neq, 4),
        (SyntaxKind::BANG_EQ, BinaryOp::Neq, 4),
        (SyntaxKind::LT, BinaryOp::Lt, 5),
        (SyntaxKind::LT_EQ, BinaryOp::Le, 5),
        (SyntaxKind::GT, BinaryOp::Gt, 5),
        (SyntaxKind::GT_EQ, BinaryOp::Ge, 5),
        (SyntaxKind::PLUS, BinaryOp::Add, 6),
        (SyntaxKind::MINUS, BinaryOp::Sub, 6),
        (SyntaxKind::STAR, BinaryOp::Mul, 7),
        (SyntaxKind::SLASH, BinaryOp::Div, 7),
    ],
    prefix: 8,
};

impl PrecedenceTable {
    /// Value operator spelled by `kind`, with its binding power
    pub fn expr_op(&self, kind: SyntaxKind) -> Option<(BinaryOp, u8)> {
        self.expr
            .iter()
            .find(|(k, _, _)| *k == kind)
            .map(|&(_, op, prec)| (op, prec))
    }

    /// Condition connective spelled by `kind`, with its binding power
    pub fn tla_op(&self, kind: SyntaxKind) -> Option<(TlaBinaryOp, u8)> {
        self.tla
            .iter()
            .find(|(k, _, _)| *k == kind)
            .map(|&(_, op, prec)| (op, prec))
    }

    pub fn binary(&self, op: BinaryOp) -> u8 {
        self.expr
            .iter()
            .find(|(_, o, _)| *o == op)
            .map_or(self.prefix, |&(_, _, prec)| prec)
    }

    pub fn connective(&self, op: TlaBinaryOp) -> u8 {
        self.tla
            .iter()
            .find(|(_, o, _)| *o == op)
            .map_or(self.prefix, |&(_, _, prec)| prec)
    }

    /// Binding power of the prefix operators `! - ~`
    pub fn prefix(&self) -> u8 {
        self.prefix
    }
}

/// Tokens that can begin a value expression
pub const EXPR_START: &[SyntaxKind] = &[
    SyntaxKind::L_PAREN,
    SyntaxKind::L_BRACE,
    SyntaxKind::IDENT,
    SyntaxKind::NUMBER,
    SyntaxKind::STRING,
    SyntaxKind::TRUE_KW,
    SyntaxKind::FALSE_KW,
    SyntaxKind::NULL_KW,
    SyntaxKind::BANG,
    SyntaxKind::MINUS,
];

fn at_expr_start<P: SclParser>(p: &P) -> bool {
    p.at_any(EXPR_START) || at_name(p)
}

// ============================================================================
// VALUE EXPRESSIONS
// ============================================================================

/// Parse a value expression
pub fn parse_expr<P: SclParser>(p: &mut P) -> PResult<Expr> {
    with_context(p, ParseContext::Expression, |p| parse_expr_bp(p, 0))
}

fn parse_expr_bp<P: SclParser>(p: &mut P, min_prec: u8) -> PResult<Expr> {
    let lhs = parse_unary(p)?;
    parse_expr_from(p, lhs, min_prec)
}

/// Continue a value expression whose left operand is already parsed
fn parse_expr_from<P: SclParser>(p: &mut P, mut lhs: Expr, min_prec: u8) -> PResult<Expr> {
    let table = p.precedence();
    while let Some((op, prec)) = table.expr_op(p.current_kind()) {
        if prec < min_prec {
            break;
        }
        p.bump();
        if !at_expr_start(p) {
            let error = p
                .unexpected(EXPR_START, ErrorCode::E0402)
                .with_hint(format!("'{}' needs a right-hand operand", op.symbol()));
            return Err(error.into());
        }
        let rhs = parse_expr_bp(p, prec + 1)?;
        lhs = Expr::binary(op, lhs, rhs);
    }
    Ok(lhs)
}

fn parse_unary<P: SclParser>(p: &mut P) -> PResult<Expr> {
    let op = match p.current_kind() {
        SyntaxKind::BANG => UnaryOp::Not,
        SyntaxKind::MINUS => UnaryOp::Neg,
        _ => return parse_primary(p),
    };
    p.bump();
    let operand = parse_unary(p)?;
    Ok(Expr::unary(op, operand))
}

fn parse_primary<P: SclParser>(p: &mut P) -> PResult<Expr> {
    match p.current_kind() {
        SyntaxKind::L_PAREN => {
            p.bump();
            let inner = parse_expr_bp(p, 0)?;
            p.expect(SyntaxKind::R_PAREN)?;
            Ok(inner)
        }
        SyntaxKind::L_BRACE => parse_struct_literal(p),
        SyntaxKind::NUMBER => {
            let value = p.current_text().parse::<u64>().map_err(|_| {
                ParseError::lex(LexErrorKind::InvalidNumber, p.current_range())
            })?;
            p.bump();
            Ok(Expr::Literal(Literal::Number(value)))
        }
        SyntaxKind::STRING => {
            let text = p.current_text();
            let raw = text
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(text);
            let literal = Literal::String(SmolStr::new(raw));
            p.bump();
            Ok(Expr::Literal(literal))
        }
        SyntaxKind::TRUE_KW => {
            p.bump();
            Ok(Expr::Literal(Literal::Boolean(true)))
        }
        SyntaxKind::FALSE_KW => {
            p.bump();
            Ok(Expr::Literal(Literal::Boolean(false)))
        }
        SyntaxKind::NULL_KW => {
            p.bump();
            Ok(Expr::Literal(Literal::Null))
        }
        _ if at_name(p) => parse_name_or_field_access(p),
        _ => Err(p.unexpected(EXPR_START, ErrorCode::E0406).into()),
    }
}

/// `name` or `object.field`; a second `.` is rejected
fn parse_name_or_field_access<P: SclParser>(p: &mut P) -> PResult<Expr> {
    let object = expect_name(p)?;
    if !p.eat(SyntaxKind::DOT) {
        return Ok(Expr::Identifier(object));
    }
    let field = expect_name(p)?;
    if p.at(SyntaxKind::DOT) {
        let error = p
            .unexpected(&[], ErrorCode::E0403)
            .with_hint(format!("only one level of access is allowed: '{object}.{field}'"));
        return Err(error.into());
    }
    Ok(Expr::FieldAccess { object, field })
}

/// `{ name: expr, ... }` with at least one field
fn parse_struct_literal<P: SclParser>(p: &mut P) -> PResult<Expr> {
    with_context(p, ParseContext::StructLiteral, |p| {
        p.expect(SyntaxKind::L_BRACE)?;
        let first = parse_struct_field(p)?;
        let mut rest = Vec::new();
        while p.eat(SyntaxKind::COMMA) {
            rest.push(parse_struct_field(p)?);
        }
        p.expect(SyntaxKind::R_BRACE)?;
        Ok(Expr::StructLiteral {
            fields: NonEmpty::from_parts(first, rest),
        })
    })
}

fn parse_struct_field<P: SclParser>(p: &mut P) -> PResult<StructField> {
    let name = expect_name(p)?;
    p.expect(SyntaxKind::COLON)?;
    let value = parse_expr_bp(p, 0)?;
    Ok(StructField { name, value })
}

// ============================================================================
// CONDITIONS (TLA+ SUBSET)
// ============================================================================

/// Parse a condition, including top-level implication
pub fn parse_condition<P: SclParser>(p: &mut P) -> PResult<TlaExpr> {
    with_context(p, ParseContext::Condition, |p| parse_tla(p, 0))
}

/// Parse the guard of a `when` case
///
/// The guard stops before a top-level `=>`, which introduces the target;
/// an implication inside a guard must be parenthesized.
pub fn parse_guard<P: SclParser>(p: &mut P) -> PResult<TlaExpr> {
    let min_prec = p.precedence().connective(TlaBinaryOp::Implies) + 1;
    with_context(p, ParseContext::Condition, |p| parse_tla(p, min_prec))
}

fn parse_tla<P: SclParser>(p: &mut P, min_prec: u8) -> PResult<TlaExpr> {
    let table = p.precedence();
    let mut lhs = parse_tla_prefix(p, min_prec)?;
    while let Some((op, prec)) = table.tla_op(p.current_kind()) {
        if prec < min_prec {
            break;
        }
        p.bump();
        let rhs = parse_tla(p, prec + 1)?;
        lhs = TlaExpr::binary(op, lhs, rhs);
    }
    Ok(lhs)
}

fn parse_tla_prefix<P: SclParser>(p: &mut P, min_prec: u8) -> PResult<TlaExpr> {
    match p.current_kind() {
        SyntaxKind::TILDE => {
            p.bump();
            let prefix = p.precedence().prefix();
            let operand = parse_tla_prefix(p, prefix)?;
            Ok(TlaExpr::not(operand))
        }
        SyntaxKind::EXISTS | SyntaxKind::FORALL => parse_quantifier(p, min_prec),
        SyntaxKind::L_PAREN => {
            p.bump();
            let inner = parse_tla(p, 0)?;
            p.expect(SyntaxKind::R_PAREN)?;
            match inner {
                // `(a + b) * c`: keep going at the value level
                TlaExpr::Expr(expr) => Ok(TlaExpr::Expr(parse_expr_from(p, expr, 0)?)),
                other => Ok(other),
            }
        }
        _ if at_expr_start(p) => Ok(TlaExpr::Expr(parse_expr_bp(p, 0)?)),
        _ => {
            let mut expected = vec![
                SyntaxKind::TILDE,
                SyntaxKind::EXISTS,
                SyntaxKind::FORALL,
            ];
            expected.extend_from_slice(EXPR_START);
            Err(p.unexpected(&expected, ErrorCode::E0406).into())
        }
    }
}

/// `\E Relation R x by k : body`
fn parse_quantifier<P: SclParser>(p: &mut P, min_prec: u8) -> PResult<TlaExpr> {
    let kind = if p.eat(SyntaxKind::EXISTS) {
        QuantifierKind::Exists
    } else {
        p.expect(SyntaxKind::FORALL)?;
        QuantifierKind::ForAll
    };
    let (relation, var, binding) = with_context(p, ParseContext::Quantifier, |p| {
        if !p.eat(SyntaxKind::RELATION_KW) {
            let error = p
                .unexpected(&[SyntaxKind::RELATION_KW], ErrorCode::E0704)
                .with_hint("quantifiers range over a relation: '\\E Relation R x by key : cond'");
            return Err(error.into());
        }
        let relation = expect_name(p)?;
        let var = expect_name(p)?;
        p.expect(SyntaxKind::BY_KW)?;
        let binding = parse_expr_bp(p, 0)?;
        p.expect(SyntaxKind::COLON)?;
        Ok((relation, var, binding))
    })?;
    let body = parse_tla(p, min_prec)?;
    Ok(TlaExpr::Quantifier {
        kind,
        relation,
        var,
        binding,
        body: Box::new(body),
    })
}
