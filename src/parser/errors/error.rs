//! Parse error types
//!
//! Provides rich error information including:
//! - Error kind (lexical, unexpected token, end of input, missing element)
//! - Error codes for categorization
//! - Expected and found token kinds
//! - Byte range plus line/column span
//! - Hints and related source locations

use text_size::{TextRange, TextSize};
use thiserror::Error;

use super::codes::ErrorCode;
use super::context::ParseContext;
use crate::base::Span;
use crate::parser::SyntaxKind;

/// Kinds of lexical failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
pub enum LexErrorKind {
    #[default]
    #[error("invalid character")]
    InvalidCharacter,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    #[error("invalid numeric literal")]
    InvalidNumber,
}

impl LexErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidCharacter => ErrorCode::E0101,
            Self::UnterminatedString => ErrorCode::E0102,
            Self::UnterminatedBlockComment => ErrorCode::E0103,
            Self::InvalidNumber => ErrorCode::E0104,
        }
    }
}

/// Top-level error taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The lexer could not produce a valid token
    Lex(LexErrorKind),
    /// A token is present but not valid at this grammar position
    UnexpectedToken,
    /// Input ended while a construct was still open
    UnexpectedEndOfInput,
    /// A structurally mandatory element is absent
    MissingRequiredElement,
}

/// Related location information for an error
///
/// Used to point to related source locations, e.g.,
/// "unclosed brace opened here" pointing to the opening `{`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    /// Description of this related location
    pub message: String,
    /// Source range
    pub range: TextRange,
}

impl RelatedInfo {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// A syntax error produced while lexing or parsing an SCL document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{span}: {code}: {message}")]
pub struct ParseError {
    pub kind: ErrorKind,
    /// Categorized error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Byte range of the offending token
    pub range: TextRange,
    /// Line/column equivalent of `range`
    pub span: Span,
    /// Token kinds that would have been accepted
    pub expected: Vec<SyntaxKind>,
    /// Token kind actually found ([`SyntaxKind::EOF`] at end of input)
    pub found: Option<SyntaxKind>,
    /// Where in the document structure the error happened
    pub context: Option<ParseContext>,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
    /// Related source locations
    pub related: Vec<RelatedInfo>,
}

impl ParseError {
    /// Create a new error with minimal information
    pub fn new(kind: ErrorKind, code: ErrorCode, message: impl Into<String>, range: TextRange) -> Self {
        Self {
            kind,
            code,
            message: message.into(),
            range,
            span: Span::default(),
            expected: Vec::new(),
            found: None,
            context: None,
            hint: None,
            related: Vec::new(),
        }
    }

    /// Create an error for an invalid lexer token
    pub fn lex(kind: LexErrorKind, range: TextRange) -> Self {
        Self::new(ErrorKind::Lex(kind), kind.code(), kind.to_string(), range)
    }

    /// Create a builder for more complex error construction
    pub fn builder(kind: ErrorKind, code: ErrorCode) -> ParseErrorBuilder {
        ParseErrorBuilder::new(kind, code)
    }

    pub fn offset(&self) -> TextSize {
        self.range.start()
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self.kind, ErrorKind::Lex(_))
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    /// Format the error for display, including its hint
    pub fn format(&self) -> String {
        let mut result = format!("{}: {}", self.code, self.message);
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        for related in &self.related {
            result.push_str(&format!("\n  note: {}", related.message));
        }
        result
    }
}

/// Builder for creating complex parse errors
pub struct ParseErrorBuilder {
    kind: ErrorKind,
    code: ErrorCode,
    message: Option<String>,
    range: Option<TextRange>,
    expected: Vec<SyntaxKind>,
    found: Option<SyntaxKind>,
    context: Option<ParseContext>,
    hint: Option<String>,
    related: Vec<RelatedInfo>,
}

impl ParseErrorBuilder {
    pub fn new(kind: ErrorKind, code: ErrorCode) -> Self {
        Self {
            kind,
            code,
            message: None,
            range: None,
            expected: Vec::new(),
            found: None,
            context: None,
            hint: None,
            related: Vec::new(),
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn range(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn expected(mut self, expected: &[SyntaxKind]) -> Self {
        self.expected = expected.to_vec();
        self
    }

    pub fn found(mut self, found: SyntaxKind) -> Self {
        self.found = Some(found);
        self
    }

    pub fn context(mut self, context: ParseContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn related(mut self, message: impl Into<String>, range: TextRange) -> Self {
        self.related.push(RelatedInfo::new(message, range));
        self
    }

    /// Build the error, using the code's default message if none was set
    pub fn build(self) -> ParseError {
        ParseError {
            kind: self.kind,
            code: self.code,
            message: self
                .message
                .unwrap_or_else(|| self.code.default_message().to_string()),
            range: self.range.unwrap_or_else(|| TextRange::empty(TextSize::new(0))),
            span: Span::default(),
            expected: self.expected,
            found: self.found,
            context: self.context,
            hint: self.hint,
            related: self.related,
        }
    }
}

/// A non-empty, source-ordered list of parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} syntax error(s); first: {}", .0.len(), .0[0])]
pub struct ParseErrors(Vec<ParseError>);

impl ParseErrors {
    /// Wrap a list of errors; returns `None` for an empty list
    pub fn new(errors: Vec<ParseError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn first(&self) -> &ParseError {
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParseError> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<ParseError> {
        self.0
    }
}

impl IntoIterator for ParseErrors {
    type Item = ParseError;
    type IntoIter = std::vec::IntoIter<ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParseErrors {
    type Item = &'a ParseError;
    type IntoIter = std::slice::Iter<'a, ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
