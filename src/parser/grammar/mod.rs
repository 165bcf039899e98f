//! Grammar modules for SCL parsing
//!
//! This module contains the recursive-descent grammar, organized by construct:
//! - `declarations` - Program, `type`, `context`, `state`, `use`, precondition and `next` blocks
//! - `statements` - Statements of state and `foreach` bodies
//! - `expressions` - Precedence climbing for value expressions and TLA+ conditions
//! - `types` - Type annotations, qualified names and `name: type;` fields
//!
//! The parsing functions are generic over the [`SclParser`] trait so the token
//! cursor, diagnostics and recovery policy stay in one place (`parser.rs`).

pub mod declarations;
pub mod expressions;
pub mod statements;
pub mod types;

pub use declarations::parse_program;
pub use expressions::{PRECEDENCE, PrecedenceTable, parse_condition, parse_expr};
pub use statements::parse_statement;
pub use types::{parse_qualified_name, parse_type};

use text_size::{TextRange, TextSize};

use super::ast::Name;
use super::errors::{ErrorCode, ParseContext, ParseError};
use super::syntax_kind::SyntaxKind;

/// Why a grammar function gave up
#[derive(Debug)]
pub enum Abort {
    /// A fresh error that still has to be reported or recovered from
    Error(ParseError),
    /// Errors inside this construct were already recorded and the cursor has
    /// been resynchronized; the construct itself could not be built
    Recovered,
}

impl From<ParseError> for Abort {
    fn from(error: ParseError) -> Self {
        Self::Error(error)
    }
}

pub type PResult<T> = Result<T, Abort>;

/// Where an item began: token index and number of open delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub pos: usize,
    pub depth: usize,
}

/// Trait for grammar parsing operations
///
/// The main parser implements this trait to provide the token cursor,
/// nesting depth, diagnostics and the recovery policy.
pub trait SclParser {
    // Token inspection
    fn current_kind(&self) -> SyntaxKind;
    fn current_text(&self) -> &str;
    fn current_range(&self) -> TextRange;

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.at(SyntaxKind::EOF)
    }

    /// End offset of the last consumed token
    fn last_end(&self) -> TextSize;

    /// Cursor position and delimiter nesting at the start of an item
    fn checkpoint(&self) -> Checkpoint;

    // Token consumption
    fn bump(&mut self);

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> PResult<()> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected(&[kind], expected_code(kind)).into())
        }
    }

    // Diagnostics
    fn push_context(&mut self, context: ParseContext);
    fn pop_context(&mut self);

    /// Error for the current token not being one of `expected`
    fn unexpected(&self, expected: &[SyntaxKind], code: ErrorCode) -> ParseError;

    /// Error for a mandatory element that is absent at the current token
    fn missing(&self, code: ErrorCode, message: &str) -> ParseError;

    /// Number of errors recorded so far
    fn error_count(&self) -> usize;

    /// Handle a failed item that started at `start`
    ///
    /// Fail-fast parsers return the abort unchanged. Resynchronizing parsers
    /// record the error, skip to the next safe boundary and return `Ok`;
    /// tokens in `starts` begin a new item and stop the skip. At least one
    /// token is consumed when the item failed on its first token.
    fn recover(&mut self, abort: Abort, start: Checkpoint, starts: &[SyntaxKind]) -> PResult<()>;

    /// Operator table used by the expression parser
    fn precedence(&self) -> &'static PrecedenceTable;
}

/// Run `f` with `context` pushed for error messages
pub fn with_context<P: SclParser, T>(
    p: &mut P,
    context: ParseContext,
    f: impl FnOnce(&mut P) -> PResult<T>,
) -> PResult<T> {
    p.push_context(context);
    let result = f(p);
    p.pop_context();
    result
}

/// Whether the current token can be read as a name
pub fn at_name<P: SclParser>(p: &P) -> bool {
    let kind = p.current_kind();
    kind == SyntaxKind::IDENT || kind.is_contextual_keyword()
}

/// Consume an identifier (or a contextual keyword) and return it as a [`Name`]
pub fn expect_name<P: SclParser>(p: &mut P) -> PResult<Name> {
    if at_name(p) {
        let name = Name::from_ident(p.current_text());
        p.bump();
        Ok(name)
    } else {
        let mut error = p.unexpected(&[SyntaxKind::IDENT], ErrorCode::E0301);
        if p.current_kind().is_keyword() {
            error = error.with_hint(format!(
                "{} is a reserved word and cannot be used as a name",
                p.current_kind()
            ));
        }
        Err(error.into())
    }
}

/// Range from `start` to the end of the last consumed token
pub fn range_from<P: SclParser>(p: &P, start: TextSize) -> TextRange {
    TextRange::new(start, p.last_end().max(start))
}

/// Build a non-empty list, or report why it is empty
///
/// If errors were recorded since `errors_before`, the items were dropped by
/// recovery and the list is reported as [`Abort::Recovered`] once the closing
/// brace is consumed.
pub fn close_non_empty<P: SclParser, T>(
    p: &mut P,
    items: Vec<T>,
    errors_before: usize,
    expected: &[SyntaxKind],
    message: &str,
) -> PResult<super::ast::NonEmpty<T>> {
    if items.is_empty() && p.error_count() == errors_before {
        let mut error = p.unexpected(expected, ErrorCode::E0206);
        if !p.at_eof() {
            error.message = message.to_string();
        }
        return Err(error.into());
    }
    p.expect(SyntaxKind::R_BRACE)?;
    super::ast::NonEmpty::new(items).ok_or(Abort::Recovered)
}

/// Error code used when `kind` was expected but not found
fn expected_code(kind: SyntaxKind) -> ErrorCode {
    match kind {
        SyntaxKind::SEMICOLON => ErrorCode::E0201,
        SyntaxKind::R_BRACE => ErrorCode::E0202,
        SyntaxKind::R_PAREN => ErrorCode::E0203,
        SyntaxKind::R_BRACKET => ErrorCode::E0204,
        SyntaxKind::IDENT => ErrorCode::E0301,
        SyntaxKind::FAT_ARROW => ErrorCode::E0703,
        _ => ErrorCode::E0902,
    }
}

/// Tokens that begin a top-level declaration
pub const DECLARATION_START: &[SyntaxKind] = &[
    SyntaxKind::TYPE_KW,
    SyntaxKind::CONTEXT_KW,
    SyntaxKind::STATE_KW,
];

/// Tokens that begin a statement
pub const STATEMENT_START: &[SyntaxKind] = &[
    SyntaxKind::LET_KW,
    SyntaxKind::SELECT_KW,
    SyntaxKind::FOREACH_KW,
    SyntaxKind::UPDATE_KW,
    SyntaxKind::INSERT_KW,
    SyntaxKind::DELETE_KW,
    SyntaxKind::ASSERT_KW,
    SyntaxKind::COMMIT_KW,
];

/// Tokens that begin a statement of a state body, or its closing `next` block
pub const BODY_STATEMENT_START: &[SyntaxKind] = &[
    SyntaxKind::LET_KW,
    SyntaxKind::SELECT_KW,
    SyntaxKind::FOREACH_KW,
    SyntaxKind::UPDATE_KW,
    SyntaxKind::INSERT_KW,
    SyntaxKind::DELETE_KW,
    SyntaxKind::ASSERT_KW,
    SyntaxKind::COMMIT_KW,
    SyntaxKind::NEXT_KW,
];

/// Tokens that begin an element of a state body
pub const STATE_BODY_START: &[SyntaxKind] = &[
    SyntaxKind::USE_KW,
    SyntaxKind::PRECONDITION_KW,
    SyntaxKind::PRE_KW,
    SyntaxKind::LET_KW,
    SyntaxKind::SELECT_KW,
    SyntaxKind::FOREACH_KW,
    SyntaxKind::UPDATE_KW,
    SyntaxKind::INSERT_KW,
    SyntaxKind::DELETE_KW,
    SyntaxKind::ASSERT_KW,
    SyntaxKind::COMMIT_KW,
    SyntaxKind::NEXT_KW,
];

/// Tokens that begin a `next` case
pub const NEXT_CASE_START: &[SyntaxKind] = &[SyntaxKind::WHEN_KW, SyntaxKind::OTHERWISE_KW];
