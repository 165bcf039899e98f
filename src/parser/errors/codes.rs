//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens)
//! - E02xx: Structural errors (braces, semicolons, end of input)
//! - E03xx: Declaration errors (type, context, state headers)
//! - E04xx: Expression errors
//! - E05xx: Use-clause errors
//! - E07xx: Statement and transition errors
//! - E09xx: Generic/fallback errors

use std::fmt;

/// Error codes for parser diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Invalid or unexpected character in source
    E0101,
    /// Unterminated string literal
    E0102,
    /// Unterminated block comment
    E0103,
    /// Invalid numeric literal
    E0104,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// Missing semicolon
    E0201,
    /// Unclosed brace `{`
    E0202,
    /// Unclosed parenthesis `(`
    E0203,
    /// Unclosed bracket `[`
    E0204,
    /// Empty body where at least one element is required
    E0206,
    /// Input ended inside a construct
    E0207,

    // =========================================================================
    // E03xx: Declaration errors
    // =========================================================================
    /// Missing identifier/name
    E0301,
    /// Token that cannot start a top-level declaration
    E0302,
    /// Missing `uses` list on a state
    E0303,
    /// Unexpected token in a state body
    E0304,
    /// Missing or invalid type annotation
    E0305,
    /// Missing `next` block
    E0306,

    // =========================================================================
    // E04xx: Expression errors
    // =========================================================================
    /// Invalid expression
    E0401,
    /// Missing operand after an operator
    E0402,
    /// Chained field access (`a.b.c`)
    E0403,
    /// Missing expression where expected
    E0406,

    // =========================================================================
    // E05xx: Use-clause errors
    // =========================================================================
    /// `use` not followed by `state`, `context` or `type`
    E0501,
    /// Invalid qualified name
    E0502,

    // =========================================================================
    // E07xx: Statement and transition errors
    // =========================================================================
    /// Invalid statement
    E0701,
    /// Invalid `next` case
    E0702,
    /// Missing `=>` in a transition
    E0703,
    /// Invalid quantifier
    E0704,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Unexpected token in current context
    E0901,
    /// Expected a specific token
    E0902,
    /// Internal parser error
    E0999,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0206 => "E0206",
            Self::E0207 => "E0207",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0305 => "E0305",
            Self::E0306 => "E0306",
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
            Self::E0406 => "E0406",
            Self::E0501 => "E0501",
            Self::E0502 => "E0502",
            Self::E0701 => "E0701",
            Self::E0702 => "E0702",
            Self::E0703 => "E0703",
            Self::E0704 => "E0704",
            Self::E0901 => "E0901",
            Self::E0902 => "E0902",
            Self::E0999 => "E0999",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 | Self::E0104 => "lexical error",
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 | Self::E0206 | Self::E0207 => {
                "structural error"
            }
            Self::E0301 | Self::E0302 | Self::E0303 | Self::E0304 | Self::E0305 | Self::E0306 => {
                "declaration error"
            }
            Self::E0401 | Self::E0402 | Self::E0403 | Self::E0406 => "expression error",
            Self::E0501 | Self::E0502 => "use error",
            Self::E0701 | Self::E0702 | Self::E0703 | Self::E0704 => "statement error",
            Self::E0901 | Self::E0902 | Self::E0999 => "syntax error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "invalid character",
            Self::E0102 => "unterminated string literal",
            Self::E0103 => "unterminated block comment",
            Self::E0104 => "invalid numeric literal",
            Self::E0201 => "missing semicolon",
            Self::E0202 => "unclosed brace",
            Self::E0203 => "unclosed parenthesis",
            Self::E0204 => "unclosed bracket",
            Self::E0206 => "empty body",
            Self::E0207 => "unexpected end of input",
            Self::E0301 => "missing identifier",
            Self::E0302 => "expected a declaration",
            Self::E0303 => "missing 'uses' list",
            Self::E0304 => "unexpected token in state body",
            Self::E0305 => "expected a type",
            Self::E0306 => "missing 'next' block",
            Self::E0401 => "invalid expression",
            Self::E0402 => "missing operand",
            Self::E0403 => "chained field access is not supported",
            Self::E0406 => "expected expression",
            Self::E0501 => "expected 'state', 'context' or 'type' after 'use'",
            Self::E0502 => "invalid qualified name",
            Self::E0701 => "invalid statement",
            Self::E0702 => "invalid transition",
            Self::E0703 => "missing '=>' in transition",
            Self::E0704 => "invalid quantifier",
            Self::E0901 => "unexpected token",
            Self::E0902 => "expected token",
            Self::E0999 => "internal parser error",
        }
    }

    /// Check if this is a lexical error
    pub fn is_lexical(&self) -> bool {
        self.as_str().starts_with("E01")
    }

    /// Check if this is a structural error (delimiters, terminators)
    pub fn is_structural(&self) -> bool {
        self.as_str().starts_with("E02")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
