//! Parser error handling module
//!
//! This module provides structured diagnostics for the SCL lexer and parser:
//! - Error kinds matching the lexical/structural taxonomy
//! - Categorized error codes for filtering and documentation
//! - Context-aware error messages
//! - Related span tracking (e.g., "opened here" for unclosed braces)

mod codes;
mod context;
mod error;

pub use codes::ErrorCode;
pub use context::ParseContext;
pub use error::{ErrorKind, LexErrorKind, ParseError, ParseErrorBuilder, ParseErrors, RelatedInfo};
