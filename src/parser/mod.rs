//! Lexer, parser and AST for SCL documents
//!
//! This module turns SCL source text into a typed [`Program`] or a list of
//! structured [`ParseError`]s.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → lossless tokens with SyntaxKind
//!     ↓
//! Parser → significant tokens, delimiter stack, recovery policy
//!     ↓
//! Grammar (recursive descent + precedence climbing) → owned AST
//!     ↓
//! Program + Vec<ParseError>
//! ```
//!
//! The lexer never loses input: whitespace, comments and invalid characters
//! are all tokens, so concatenating token texts reproduces the source. The
//! parser works on the significant tokens only.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod errors;
pub(crate) mod grammar;
mod lexer;
pub mod rule_parser;
mod syntax_kind;

pub use ast::*;
pub use errors::{ErrorCode, ErrorKind, LexErrorKind, ParseContext, ParseError, ParseErrors};
pub use lexer::{Lexer, Token, TokenValue, tokenize};
pub use parser::{Parse, ParseConfig, RecoveryMode, parse, parse_program, parse_with_config};
pub use rule_parser::{Rule, RuleNode, parse_rule};
pub use syntax_kind::SyntaxKind;

/// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
