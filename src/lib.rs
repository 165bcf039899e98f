//! # scl-base
//!
//! Core library for State Construction Language (SCL) lexing, parsing and AST.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Parallel batch parsing
//!   ↓
//! syntax    → Canonical formatter, S-expression dumps
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, AST, diagnostics
//!   ↓
//! base      → Primitives (TextRange, LineIndex, Span)
//! ```
//!
//! ```
//! let program = scl::parse_program("type Acc { bal: int; }").unwrap();
//! assert_eq!(program.types().count(), 1);
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → project)
// ============================================================================

/// Foundation types: TextRange, line/column conversion
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, AST, error codes
pub mod parser;

/// Syntax output: formatter and S-expression dumps
pub mod syntax;

/// Batch parsing of many documents
pub mod project;

// Re-export the entry points
pub use parser::{Parse, ParseConfig, RecoveryMode, parse, parse_program, parse_with_config};

// Re-export foundation types
pub use base::{LineCol, LineIndex, Position, Span, TextRange, TextSize};
