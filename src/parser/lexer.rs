//! Logos-based lexer for SCL
//!
//! Fast, lossless tokenization using the logos crate. Every byte of the input
//! ends up in exactly one token (trivia and invalid input included), so the
//! concatenated token texts always reproduce the source.

use super::errors::LexErrorKind;
use super::syntax_kind::SyntaxKind;
use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub range: TextRange,
    /// Set when `kind` is [`SyntaxKind::ERROR`]
    pub error: Option<LexErrorKind>,
}

/// Decoded payload of a literal token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenValue<'a> {
    Number(u64),
    /// String contents between the quotes; escapes are kept verbatim
    String(&'a str),
    Boolean(bool),
}

impl<'a> Token<'a> {
    pub fn offset(&self) -> TextSize {
        self.range.start()
    }

    /// Decode the literal value carried by this token, if any
    pub fn value(&self) -> Option<TokenValue<'a>> {
        match self.kind {
            SyntaxKind::NUMBER => self.text.parse().ok().map(TokenValue::Number),
            SyntaxKind::STRING => self
                .text
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .map(TokenValue::String),
            SyntaxKind::TRUE_KW => Some(TokenValue::Boolean(true)),
            SyntaxKind::FALSE_KW => Some(TokenValue::Boolean(false)),
            _ => None,
        }
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let span = self.inner.span();
        let range = TextRange::new(
            TextSize::new(span.start as u32),
            TextSize::new(span.end as u32),
        );

        let (kind, error) = match logos_token {
            Ok(t) => (t.into(), None),
            Err(e) => (SyntaxKind::ERROR, Some(e)),
        };

        Some(Token {
            kind,
            text,
            range,
            error,
        })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

fn block_comment(lex: &mut logos::Lexer<LogosToken>) -> Result<(), LexErrorKind> {
    let rest = lex.remainder();
    match rest.find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            Ok(())
        }
        None => {
            lex.bump(rest.len());
            Err(LexErrorKind::UnterminatedBlockComment)
        }
    }
}

fn string_literal(lex: &mut logos::Lexer<LogosToken>) -> Result<(), LexErrorKind> {
    let bytes = lex.remainder().as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => {
                lex.bump(i + 1);
                return Ok(());
            }
            _ => i += 1,
        }
    }
    lex.bump(bytes.len());
    Err(LexErrorKind::UnterminatedString)
}

fn number(lex: &mut logos::Lexer<LogosToken>) -> Result<(), LexErrorKind> {
    lex.slice()
        .parse::<u64>()
        .map(|_| ())
        .map_err(|_| LexErrorKind::InvalidNumber)
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(error = LexErrorKind)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"\s+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+", number)]
    Number,

    #[token("\"", string_literal)]
    String,

    // =========================================================================
    // MULTI-CHARACTER OPERATORS (longest match wins over single-char)
    // =========================================================================
    #[token("::")]
    ColonColon,
    #[token("==")]
    EqEq,
    #[token("!=")]
    BangEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("=>")]
    FatArrow,
    #[token("\\/")]
    TlaOr,
    #[token("/\\")]
    TlaAnd,
    #[token("\\E")]
    Exists,
    #[token("\\A")]
    Forall,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("#")]
    Hash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,

    // =========================================================================
    // KEYWORDS (alphabetical; a token beats the identifier regex)
    // =========================================================================
    #[token("assert")]
    AssertKw,
    #[token("bool")]
    BoolKw,
    #[token("by")]
    ByKw,
    #[token("commit")]
    CommitKw,
    #[token("context")]
    ContextKw,
    #[token("delete")]
    DeleteKw,
    #[token("export")]
    ExportKw,
    #[token("false")]
    FalseKw,
    #[token("float")]
    FloatKw,
    #[token("foreach")]
    ForeachKw,
    #[token("from")]
    FromKw,
    #[token("in")]
    InKw,
    #[token("insert")]
    InsertKw,
    #[token("int")]
    IntKw,
    #[token("into")]
    IntoKw,
    #[token("let")]
    LetKw,
    #[token("limit")]
    LimitKw,
    #[token("next")]
    NextKw,
    #[token("null")]
    NullKw,
    #[token("otherwise")]
    OtherwiseKw,
    #[token("pre")]
    PreKw,
    #[token("precondition")]
    PreconditionKw,
    #[token("Relation")]
    RelationKw,
    #[token("select")]
    SelectKw,
    #[token("set")]
    SetKw,
    #[token("state")]
    StateKw,
    #[token("string")]
    StringKw,
    #[token("true")]
    TrueKw,
    #[token("type")]
    TypeKw,
    #[token("update")]
    UpdateKw,
    #[token("use")]
    UseKw,
    #[token("uses")]
    UsesKw,
    #[token("values")]
    ValuesKw,
    #[token("when")]
    WhenKw,
    #[token("where")]
    WhereKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            // Literals
            Ident => SyntaxKind::IDENT,
            Number => SyntaxKind::NUMBER,
            String => SyntaxKind::STRING,

            // Multi-char operators
            ColonColon => SyntaxKind::COLON_COLON,
            EqEq => SyntaxKind::EQ_EQ,
            BangEq => SyntaxKind::BANG_EQ,
            LtEq => SyntaxKind::LT_EQ,
            GtEq => SyntaxKind::GT_EQ,
            FatArrow => SyntaxKind::FAT_ARROW,
            TlaOr => SyntaxKind::TLA_OR,
            TlaAnd => SyntaxKind::TLA_AND,
            Exists => SyntaxKind::EXISTS,
            Forall => SyntaxKind::FORALL,

            // Single-char punctuation
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Semicolon => SyntaxKind::SEMICOLON,
            Colon => SyntaxKind::COLON,
            Comma => SyntaxKind::COMMA,
            Dot => SyntaxKind::DOT,
            Eq => SyntaxKind::EQ,
            Hash => SyntaxKind::HASH,
            Lt => SyntaxKind::LT,
            Gt => SyntaxKind::GT,
            Plus => SyntaxKind::PLUS,
            Minus => SyntaxKind::MINUS,
            Star => SyntaxKind::STAR,
            Slash => SyntaxKind::SLASH,
            Bang => SyntaxKind::BANG,
            Tilde => SyntaxKind::TILDE,

            // Keywords
            AssertKw => SyntaxKind::ASSERT_KW,
            BoolKw => SyntaxKind::BOOL_KW,
            ByKw => SyntaxKind::BY_KW,
            CommitKw => SyntaxKind::COMMIT_KW,
            ContextKw => SyntaxKind::CONTEXT_KW,
            DeleteKw => SyntaxKind::DELETE_KW,
            ExportKw => SyntaxKind::EXPORT_KW,
            FalseKw => SyntaxKind::FALSE_KW,
            FloatKw => SyntaxKind::FLOAT_KW,
            ForeachKw => SyntaxKind::FOREACH_KW,
            FromKw => SyntaxKind::FROM_KW,
            InKw => SyntaxKind::IN_KW,
            InsertKw => SyntaxKind::INSERT_KW,
            IntKw => SyntaxKind::INT_KW,
            IntoKw => SyntaxKind::INTO_KW,
            LetKw => SyntaxKind::LET_KW,
            LimitKw => SyntaxKind::LIMIT_KW,
            NextKw => SyntaxKind::NEXT_KW,
            NullKw => SyntaxKind::NULL_KW,
            OtherwiseKw => SyntaxKind::OTHERWISE_KW,
            PreKw => SyntaxKind::PRE_KW,
            PreconditionKw => SyntaxKind::PRECONDITION_KW,
            RelationKw => SyntaxKind::RELATION_KW,
            SelectKw => SyntaxKind::SELECT_KW,
            SetKw => SyntaxKind::SET_KW,
            StateKw => SyntaxKind::STATE_KW,
            StringKw => SyntaxKind::STRING_KW,
            TrueKw => SyntaxKind::TRUE_KW,
            TypeKw => SyntaxKind::TYPE_KW,
            UpdateKw => SyntaxKind::UPDATE_KW,
            UseKw => SyntaxKind::USE_KW,
            UsesKw => SyntaxKind::USES_KW,
            ValuesKw => SyntaxKind::VALUES_KW,
            WhenKw => SyntaxKind::WHEN_KW,
            WhereKw => SyntaxKind::WHERE_KW,
        }
    }
}
