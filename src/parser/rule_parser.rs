//! Rule-based parser for testing individual grammar rules
//!
//! Parses a single grammar construct without requiring a full document around
//! it. Useful for testing specific rules in isolation and for tools that only
//! need an expression or a type.
//!
//! # Example
//!
//! ```
//! use scl::parser::rule_parser::{Rule, RuleNode, parse_rule};
//!
//! let node = parse_rule(Rule::Expr, "1 + 2 * 3").unwrap();
//! assert!(matches!(node, RuleNode::Expr(_)));
//! ```

use super::ast::{Declaration, Expr, Program, QualifiedName, Statement, TlaExpr, Type};
use super::errors::{ErrorCode, ErrorKind, ParseError};
use super::grammar::{self, PResult, SclParser};
use super::parser::{ParseConfig, Parser, run};
use super::syntax_kind::SyntaxKind;
use text_size::TextRange;

/// Grammar rules that can be parsed individually
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Whole document: declarations up to end of input
    Program,
    /// One `type`, `context` or `state` declaration
    Declaration,
    /// One statement of a state body
    Statement,
    /// A TLA+ condition, including `=>`
    Condition,
    /// A value expression
    Expr,
    /// A type annotation
    Type,
    /// `Name` or `"namespace"::Name`
    QualifiedName,
}

/// The node produced by [`parse_rule`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleNode {
    Program(Program),
    Declaration(Declaration),
    Statement(Statement),
    Condition(TlaExpr),
    Expr(Expr),
    Type(Type),
    QualifiedName(QualifiedName),
}

/// Parse `input` as exactly one `rule`
///
/// The whole input must be consumed; trailing tokens are an error. Parsing is
/// fail-fast, so the first error is returned.
pub fn parse_rule(rule: Rule, input: &str) -> Result<RuleNode, ParseError> {
    let config = ParseConfig::default();
    let (node, errors) = run(input, &config, |p| {
        let node = parse_node(rule, p)?;
        expect_end(p)?;
        Ok(node)
    });
    if let Some(error) = errors.into_iter().next() {
        return Err(error);
    }
    // Fail-fast parsing records an error whenever it gives up.
    node.ok_or_else(|| {
        ParseError::new(
            ErrorKind::UnexpectedToken,
            ErrorCode::E0999,
            ErrorCode::E0999.default_message(),
            TextRange::default(),
        )
    })
}

fn parse_node(rule: Rule, p: &mut Parser<'_>) -> PResult<RuleNode> {
    Ok(match rule {
        Rule::Program => RuleNode::Program(grammar::parse_program(p)?),
        Rule::Declaration => RuleNode::Declaration(grammar::declarations::parse_declaration(p)?),
        Rule::Statement => RuleNode::Statement(grammar::parse_statement(p)?),
        Rule::Condition => RuleNode::Condition(grammar::parse_condition(p)?),
        Rule::Expr => RuleNode::Expr(grammar::parse_expr(p)?),
        Rule::Type => RuleNode::Type(grammar::parse_type(p)?),
        Rule::QualifiedName => RuleNode::QualifiedName(grammar::parse_qualified_name(p)?),
    })
}

fn expect_end(p: &mut Parser<'_>) -> PResult<()> {
    if p.at_eof() {
        Ok(())
    } else {
        Err(p.unexpected(&[SyntaxKind::EOF], ErrorCode::E0901).into())
    }
}
