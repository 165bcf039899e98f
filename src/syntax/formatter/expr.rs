//! Source rendering of expressions, conditions, types and names
//!
//! Parentheses are not stored in the tree, so they are inserted wherever the
//! operator table would otherwise group the operands differently. Binary
//! operators are left-associative: a right operand of equal binding power
//! needs parentheses, a left one does not.

use std::fmt;

use crate::parser::ast::{Expr, Literal, QualifiedName, TlaExpr, Type};
use crate::parser::grammar::PRECEDENCE;

/// Binding power of anything that needs no parentheses
const ATOM: u8 = u8::MAX;

fn expr_prec(expr: &Expr) -> u8 {
    match expr {
        Expr::Binary { op, .. } => PRECEDENCE.binary(*op),
        Expr::Unary { .. } => PRECEDENCE.prefix(),
        _ => ATOM,
    }
}

/// Quantifiers extend as far right as they can, so they bind loosest.
fn tla_prec(expr: &TlaExpr) -> u8 {
    match expr {
        TlaExpr::Binary { op, .. } => PRECEDENCE.connective(*op),
        TlaExpr::Unary { .. } => PRECEDENCE.prefix(),
        TlaExpr::Quantifier { .. } => 0,
        TlaExpr::Expr(_) => ATOM,
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, operand: &dyn fmt::Display, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({operand})")
    } else {
        write!(f, "{operand}")
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(value) => write!(f, "{value}"),
            Literal::String(raw) => write!(f, "\"{raw}\""),
            Literal::Boolean(value) => write!(f, "{value}"),
            Literal::Null => f.write_str("null"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary { op, left, right } => {
                let prec = PRECEDENCE.binary(*op);
                write_operand(f, left, expr_prec(left) < prec)?;
                write!(f, " {} ", op.symbol())?;
                write_operand(f, right, expr_prec(right) <= prec)
            }
            Expr::Unary { op, operand } => {
                f.write_str(op.symbol())?;
                write_operand(f, operand, expr_prec(operand) < PRECEDENCE.prefix())
            }
            Expr::FieldAccess { object, field } => write!(f, "{object}.{field}"),
            Expr::StructLiteral { fields } => {
                f.write_str("{ ")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.value)?;
                }
                f.write_str(" }")
            }
            Expr::Identifier(name) => write!(f, "{name}"),
            Expr::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

impl fmt::Display for TlaExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TlaExpr::Binary { op, left, right } => {
                let prec = PRECEDENCE.connective(*op);
                write_operand(f, left, tla_prec(left) < prec)?;
                write!(f, " {} ", op.symbol())?;
                write_operand(f, right, tla_prec(right) <= prec)
            }
            TlaExpr::Unary { op, operand } => {
                f.write_str(op.symbol())?;
                write_operand(f, operand, tla_prec(operand) < PRECEDENCE.prefix())
            }
            TlaExpr::Quantifier {
                kind,
                relation,
                var,
                binding,
                body,
            } => write!(
                f,
                "{} Relation {relation} {var} by {binding} : {body}",
                kind.symbol()
            ),
            TlaExpr::Expr(expr) => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Primitive(primitive) => f.write_str(primitive.keyword()),
            Type::Generic { base, param } => write!(f, "{base}[{param}]"),
            Type::Named(name) => write!(f, "{name}"),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "\"{namespace}\"::{}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
