//! Parse context tracking for context-aware error messages
//!
//! The parser keeps a stack of contexts so errors can say where in the
//! document structure they happened and what was expected there.

/// Represents the current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseContext {
    /// At the top level of a document
    #[default]
    TopLevel,

    // Declaration contexts
    /// Inside a `type` declaration
    TypeDecl,
    /// Inside a `context` declaration
    ContextDecl,
    /// Between `state` and the opening brace of its body
    StateHeader,
    /// Inside a state body
    StateBody,

    // Body contexts
    /// Parsing a `use` statement
    UseStatement,
    /// Inside a `precondition` block
    Precondition,
    /// Parsing a statement
    Statement,
    /// Inside a `foreach` body
    ForeachBody,
    /// Inside a `next` block
    NextBlock,
    /// Inside an `export` block of a transition
    ExportBlock,

    // Other contexts
    /// Parsing a value expression
    Expression,
    /// Parsing a TLA+ condition
    Condition,
    /// Parsing a quantifier head
    Quantifier,
    /// Parsing a type annotation
    TypeAnnotation,
    /// Parsing a struct literal
    StructLiteral,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::TopLevel => "at top level",
            Self::TypeDecl => "in type declaration",
            Self::ContextDecl => "in context declaration",
            Self::StateHeader => "in state header",
            Self::StateBody => "in state body",
            Self::UseStatement => "in use statement",
            Self::Precondition => "in precondition block",
            Self::Statement => "in statement",
            Self::ForeachBody => "in foreach body",
            Self::NextBlock => "in next block",
            Self::ExportBlock => "in export block",
            Self::Expression => "in expression",
            Self::Condition => "in condition",
            Self::Quantifier => "in quantifier",
            Self::TypeAnnotation => "in type annotation",
            Self::StructLiteral => "in struct literal",
        }
    }

    /// Get a description of what tokens are expected in this context
    pub fn expected_description(&self) -> &'static str {
        match self {
            Self::TopLevel => "a 'type', 'context' or 'state' declaration",
            Self::TypeDecl | Self::ContextDecl | Self::ExportBlock => "a field 'name: type;'",
            Self::StateHeader => "'uses' followed by entity names and '{'",
            Self::StateBody => "a use statement, precondition, statement or 'next' block",
            Self::UseStatement => "'state', 'context' or 'type'",
            Self::Precondition => "a condition followed by ';'",
            Self::Statement | Self::ForeachBody => {
                "a statement (let, select, foreach, update, insert, delete, assert, commit)"
            }
            Self::NextBlock => "a 'when' or 'otherwise' case",
            Self::Expression => "an expression (literal, identifier, or operator)",
            Self::Condition => "a condition (expression, '~', or quantifier)",
            Self::Quantifier => "'Relation <relation> <var> by <expr> : <condition>'",
            Self::TypeAnnotation => "a type (int, bool, string, float, Name or Name[T])",
            Self::StructLiteral => "a field 'name: expr'",
        }
    }

    /// Check if this context is a brace-delimited body
    pub fn is_in_body(&self) -> bool {
        matches!(
            self,
            Self::TypeDecl
                | Self::ContextDecl
                | Self::StateBody
                | Self::Precondition
                | Self::ForeachBody
                | Self::NextBlock
                | Self::ExportBlock
        )
    }
}
