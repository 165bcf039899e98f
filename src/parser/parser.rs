//! Recursive descent parser for SCL
//!
//! Drives the grammar functions in [`super::grammar`] over the significant
//! tokens of a document and collects diagnostics. Two recovery policies are
//! supported: fail-fast (stop at the first error) and resynchronization (record
//! the error, skip to the next safe boundary and keep going).

use super::ast::Program;
use super::errors::{ErrorCode, ErrorKind, ParseContext, ParseError, ParseErrors};
use super::grammar::{self, Abort, Checkpoint, PResult, PRECEDENCE, PrecedenceTable, SclParser};
use super::lexer::{Token, tokenize};
use super::syntax_kind::SyntaxKind;
use crate::base::LineIndex;
use text_size::{TextRange, TextSize};

/// Parse result containing the program and any errors
///
/// With [`RecoveryMode::Resynchronize`] the program holds every declaration
/// that could be built; with fail-fast it is empty whenever `errors` is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    pub program: Program,
    /// Errors ordered by source offset
    pub errors: Vec<ParseError>,
}

impl Parse {
    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<Program, ParseErrors> {
        match ParseErrors::new(self.errors) {
            Some(errors) => Err(errors),
            None => Ok(self.program),
        }
    }
}

/// What the parser does after a syntax error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecoveryMode {
    /// Stop at the first error
    #[default]
    FailFast,
    /// Record the error, skip to the next `;` or closing `}` and continue
    Resynchronize,
}

/// Parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParseConfig {
    pub recovery: RecoveryMode,
}

impl ParseConfig {
    /// Configuration that reports every error it can find
    pub fn resynchronizing() -> Self {
        Self {
            recovery: RecoveryMode::Resynchronize,
        }
    }

    pub fn with_recovery(mut self, recovery: RecoveryMode) -> Self {
        self.recovery = recovery;
        self
    }
}

/// Parse an SCL document, stopping at the first error
pub fn parse(input: &str) -> Parse {
    parse_with_config(input, &ParseConfig::default())
}

/// Parse an SCL document with the given recovery policy
pub fn parse_with_config(input: &str, config: &ParseConfig) -> Parse {
    let (program, errors) = run(input, config, grammar::parse_program);
    Parse {
        program: program.unwrap_or_default(),
        errors,
    }
}

/// Parse an SCL document, returning the program or the first error
pub fn parse_program(input: &str) -> Result<Program, ParseError> {
    let parse = parse(input);
    match parse.errors.into_iter().next() {
        Some(error) => Err(error),
        None => Ok(parse.program),
    }
}

/// Lex `input`, run `rule` over its significant tokens and finish diagnostics
///
/// Returns the rule's value when it produced one, and every error recorded
/// along the way with line/column spans filled in.
pub(crate) fn run<'a, T>(
    input: &'a str,
    config: &ParseConfig,
    rule: impl FnOnce(&mut Parser<'a>) -> PResult<T>,
) -> (Option<T>, Vec<ParseError>) {
    let tokens = tokenize(input);
    let lex_errors: Vec<ParseError> = tokens
        .iter()
        .filter_map(|token| token.error.map(|kind| ParseError::lex(kind, token.range)))
        .collect();
    tracing::debug!(
        tokens = tokens.len(),
        lex_errors = lex_errors.len(),
        recovery = ?config.recovery,
        "parsing SCL document"
    );

    let index = LineIndex::new(input);
    if config.recovery == RecoveryMode::FailFast {
        if let Some(first) = lex_errors.into_iter().next() {
            let span = index.span(first.range);
            return (None, vec![first.with_span(span)]);
        }
        let mut parser = Parser::new(tokens, input, config.recovery, Vec::new());
        let result = rule(&mut parser);
        return parser.finish(result, &index);
    }

    let mut parser = Parser::new(tokens, input, config.recovery, lex_errors);
    let result = rule(&mut parser);
    parser.finish(result, &index)
}

/// The parser state
pub(crate) struct Parser<'a> {
    /// Significant tokens only: no trivia, no lexer errors
    tokens: Vec<Token<'a>>,
    pos: usize,
    /// Open `{` and `(` with their ranges, innermost last
    open: Vec<(SyntaxKind, TextRange)>,
    contexts: Vec<ParseContext>,
    errors: Vec<ParseError>,
    recovery: RecoveryMode,
    eof: TextRange,
    last_end: TextSize,
}

impl<'a> Parser<'a> {
    fn new(
        tokens: Vec<Token<'a>>,
        input: &str,
        recovery: RecoveryMode,
        errors: Vec<ParseError>,
    ) -> Self {
        let tokens = tokens
            .into_iter()
            .filter(|t| !t.kind.is_trivia() && t.kind != SyntaxKind::ERROR)
            .collect();
        Self {
            tokens,
            pos: 0,
            open: Vec::new(),
            contexts: Vec::new(),
            errors,
            recovery,
            eof: TextRange::empty(TextSize::of(input)),
            last_end: TextSize::new(0),
        }
    }

    fn finish<T>(mut self, result: PResult<T>, index: &LineIndex) -> (Option<T>, Vec<ParseError>) {
        let value = match result {
            Ok(value) => Some(value),
            Err(Abort::Error(error)) => {
                self.record(error);
                None
            }
            Err(Abort::Recovered) => None,
        };

        let mut errors: Vec<ParseError> = self
            .errors
            .into_iter()
            .map(|error| {
                let span = index.span(error.range);
                error.with_span(span)
            })
            .collect();
        errors.sort_by_key(|error| error.offset());

        tracing::debug!(errors = errors.len(), "parse finished");
        (value, errors)
    }

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn context(&self) -> ParseContext {
        self.contexts.last().copied().unwrap_or_default()
    }

    fn record(&mut self, error: ParseError) {
        // Every enclosing construct sees the same end of input; report it once.
        if error.kind == ErrorKind::UnexpectedEndOfInput
            && self
                .errors
                .iter()
                .any(|e| e.kind == ErrorKind::UnexpectedEndOfInput)
        {
            return;
        }
        self.errors.push(error);
    }

    fn only_parens_above(&self, depth: usize) -> bool {
        self.open
            .iter()
            .skip(depth)
            .all(|(kind, _)| *kind == SyntaxKind::L_PAREN)
    }

    fn braces_above(&self, depth: usize) -> usize {
        self.open
            .iter()
            .skip(depth)
            .filter(|(kind, _)| *kind == SyntaxKind::L_BRACE)
            .count()
    }

    /// Skip tokens until the item that started at `depth` is behind us
    ///
    /// Stops after a `;` or the `}` that closes a block opened inside the
    /// item, or before the `}` of the enclosing block, or before a token of
    /// `starts` at the item's own level.
    fn synchronize(&mut self, depth: usize, starts: &[SyntaxKind]) {
        loop {
            let kind = self.current_kind();
            match kind {
                SyntaxKind::EOF => break,
                SyntaxKind::SEMICOLON if self.only_parens_above(depth) => {
                    self.open.truncate(depth);
                    self.bump();
                    break;
                }
                SyntaxKind::R_BRACE => match self.braces_above(depth) {
                    0 if depth > 0 => {
                        self.open.truncate(depth);
                        break;
                    }
                    1 => {
                        self.bump();
                        break;
                    }
                    _ => self.bump(),
                },
                _ if starts.contains(&kind) && self.only_parens_above(depth) => {
                    self.open.truncate(depth);
                    break;
                }
                _ => self.bump(),
            }
        }
        tracing::debug!(offset = u32::from(self.current_range().start()), "resynchronized");
    }

    fn describe_expected(&self, expected: &[SyntaxKind], code: ErrorCode) -> String {
        match expected {
            [] => code.default_message().to_string(),
            [single] => single.display_name().to_string(),
            kinds if kinds.len() <= 4 => {
                let names: Vec<&str> = kinds.iter().map(|k| k.display_name()).collect();
                names.join(" or ")
            }
            _ => self.context().expected_description().to_string(),
        }
    }
}

impl SclParser for Parser<'_> {
    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::EOF)
    }

    fn current_text(&self) -> &str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    fn current_range(&self) -> TextRange {
        self.current().map(|t| t.range).unwrap_or(self.eof)
    }

    fn last_end(&self) -> TextSize {
        self.last_end
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            depth: self.open.len(),
        }
    }

    fn bump(&mut self) {
        let Some(token) = self.tokens.get(self.pos) else {
            return;
        };
        let (kind, range) = (token.kind, token.range);
        match kind {
            SyntaxKind::L_BRACE | SyntaxKind::L_PAREN => self.open.push((kind, range)),
            SyntaxKind::R_BRACE => {
                // A stray `}` leaves the stack alone; otherwise it closes any
                // unbalanced `(` inside its block as well.
                if self.open.iter().any(|(k, _)| *k == SyntaxKind::L_BRACE) {
                    while let Some((k, _)) = self.open.pop() {
                        if k == SyntaxKind::L_BRACE {
                            break;
                        }
                    }
                }
            }
            SyntaxKind::R_PAREN => {
                if matches!(self.open.last(), Some((SyntaxKind::L_PAREN, _))) {
                    self.open.pop();
                }
            }
            _ => {}
        }
        self.last_end = range.end();
        self.pos += 1;
    }

    fn push_context(&mut self, context: ParseContext) {
        self.contexts.push(context);
    }

    fn pop_context(&mut self) {
        self.contexts.pop();
    }

    fn unexpected(&self, expected: &[SyntaxKind], code: ErrorCode) -> ParseError {
        let found = self.current_kind();
        let context = self.context();
        let wanted = self.describe_expected(expected, code);

        if found == SyntaxKind::EOF {
            let mut builder = ParseError::builder(ErrorKind::UnexpectedEndOfInput, ErrorCode::E0207)
                .message(format!(
                    "unexpected end of input, expected {wanted} {}",
                    context.description()
                ))
                .range(self.eof)
                .expected(expected)
                .found(found)
                .context(context);
            if let Some((open, range)) = self.open.last() {
                builder = builder.related(format!("{} opened here", open.display_name()), *range);
            }
            if context.is_in_body() {
                builder = builder.hint("the block is never closed; add the missing '}'");
            }
            return builder.build();
        }

        let message = if expected.is_empty() {
            format!("{wanted}, found {found} {}", context.description())
        } else {
            format!("expected {wanted}, found {found} {}", context.description())
        };
        ParseError::builder(ErrorKind::UnexpectedToken, code)
            .message(message)
            .range(self.current_range())
            .expected(expected)
            .found(found)
            .context(context)
            .build()
    }

    fn missing(&self, code: ErrorCode, message: &str) -> ParseError {
        ParseError::builder(ErrorKind::MissingRequiredElement, code)
            .message(message)
            .range(self.current_range())
            .found(self.current_kind())
            .context(self.context())
            .build()
    }

    fn error_count(&self) -> usize {
        self.errors.len()
    }

    fn recover(&mut self, abort: Abort, start: Checkpoint, starts: &[SyntaxKind]) -> PResult<()> {
        if self.recovery == RecoveryMode::FailFast {
            return Err(abort);
        }
        match abort {
            Abort::Error(error) => {
                tracing::debug!(
                    code = %error.code,
                    offset = u32::from(error.offset()),
                    context = ?self.context(),
                    "recovering from syntax error"
                );
                self.record(error);
                self.synchronize(start.depth, starts);
                // Retrying an item that failed on its first token fails the same way.
                if self.pos == start.pos
                    && !matches!(self.current_kind(), SyntaxKind::R_BRACE | SyntaxKind::EOF)
                {
                    self.bump();
                }
            }
            // The failing construct already skipped to its own boundary.
            Abort::Recovered => {
                if self.open.len() > start.depth {
                    self.synchronize(start.depth, starts);
                }
            }
        }
        Ok(())
    }

    fn precedence(&self) -> &'static PrecedenceTable {
        &PRECEDENCE
    }
}
