//! Token kinds for the SCL lexer and parser
//!
//! This enum defines every token the lexer can produce. Trivia kinds are kept
//! so the token stream stays lossless; the parser skips them.

/// All token kinds in SCL
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,   // identifier
    NUMBER,  // 42
    STRING,  // "hello"

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,     // {
    R_BRACE,     // }
    L_BRACKET,   // [
    R_BRACKET,   // ]
    L_PAREN,     // (
    R_PAREN,     // )
    SEMICOLON,   // ;
    COLON,       // :
    COLON_COLON, // ::
    COMMA,       // ,
    DOT,         // .
    EQ,          // =
    EQ_EQ,       // ==
    BANG_EQ,     // !=
    HASH,        // #
    LT,          // <
    LT_EQ,       // <=
    GT,          // >
    GT_EQ,       // >=
    PLUS,        // +
    MINUS,       // -
    STAR,        // *
    SLASH,       // /
    BANG,        // !
    TILDE,       // ~
    FAT_ARROW,   // =>
    TLA_OR,      // \/
    TLA_AND,     // /\
    EXISTS,      // \E
    FORALL,      // \A

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    ASSERT_KW,
    BOOL_KW,
    BY_KW,
    COMMIT_KW,
    CONTEXT_KW,
    DELETE_KW,
    EXPORT_KW,
    FALSE_KW,
    FLOAT_KW,
    FOREACH_KW,
    FROM_KW,
    IN_KW,
    INSERT_KW,
    INT_KW,
    INTO_KW,
    LET_KW,
    LIMIT_KW,
    NEXT_KW,
    NULL_KW,
    OTHERWISE_KW,
    PRE_KW,
    PRECONDITION_KW,
    RELATION_KW,
    SELECT_KW,
    SET_KW,
    STATE_KW,
    STRING_KW,
    TRUE_KW,
    TYPE_KW,
    UPDATE_KW,
    USE_KW,
    USES_KW,
    VALUES_KW,
    WHEN_KW,
    WHERE_KW,

    // Special
    ERROR,
    EOF,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        self >= Self::ASSERT_KW && self <= Self::WHERE_KW
    }

    /// Keywords that only introduce a clause where the grammar expects one
    ///
    /// Everywhere else, including field, column and entity positions, they
    /// are ordinary names: `type Page { limit: int; }`.
    pub fn is_contextual_keyword(self) -> bool {
        matches!(
            self,
            Self::BY_KW
                | Self::EXPORT_KW
                | Self::FROM_KW
                | Self::IN_KW
                | Self::INTO_KW
                | Self::LIMIT_KW
                | Self::PRE_KW
                | Self::PRECONDITION_KW
                | Self::RELATION_KW
                | Self::SET_KW
                | Self::USES_KW
                | Self::VALUES_KW
                | Self::WHERE_KW
        )
    }

    /// Check if this is a punctuation or operator token
    pub fn is_punct(self) -> bool {
        self >= Self::L_BRACE && self <= Self::FORALL
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::NUMBER | Self::STRING | Self::TRUE_KW | Self::FALSE_KW | Self::NULL_KW
        )
    }

    /// Check if this is one of the primitive type keywords
    pub fn is_primitive_type(self) -> bool {
        matches!(
            self,
            Self::INT_KW | Self::BOOL_KW | Self::STRING_KW | Self::FLOAT_KW
        )
    }

    /// Human-readable name used in diagnostics
    pub fn display_name(self) -> &'static str {
        match self {
            Self::WHITESPACE => "whitespace",
            Self::LINE_COMMENT | Self::BLOCK_COMMENT => "comment",
            Self::IDENT => "identifier",
            Self::NUMBER => "number",
            Self::STRING => "string",
            Self::L_BRACE => "'{'",
            Self::R_BRACE => "'}'",
            Self::L_BRACKET => "'['",
            Self::R_BRACKET => "']'",
            Self::L_PAREN => "'('",
            Self::R_PAREN => "')'",
            Self::SEMICOLON => "';'",
            Self::COLON => "':'",
            Self::COLON_COLON => "'::'",
            Self::COMMA => "','",
            Self::DOT => "'.'",
            Self::EQ => "'='",
            Self::EQ_EQ => "'=='",
            Self::BANG_EQ => "'!='",
            Self::HASH => "'#'",
            Self::LT => "'<'",
            Self::LT_EQ => "'<='",
            Self::GT => "'>'",
            Self::GT_EQ => "'>='",
            Self::PLUS => "'+'",
            Self::MINUS => "'-'",
            Self::STAR => "'*'",
            Self::SLASH => "'/'",
            Self::BANG => "'!'",
            Self::TILDE => "'~'",
            Self::FAT_ARROW => "'=>'",
            Self::TLA_OR => "'\\/'",
            Self::TLA_AND => "'/\\'",
            Self::EXISTS => "'\\E'",
            Self::FORALL => "'\\A'",
            Self::ASSERT_KW => "'assert'",
            Self::BOOL_KW => "'bool'",
            Self::BY_KW => "'by'",
            Self::COMMIT_KW => "'commit'",
            Self::CONTEXT_KW => "'context'",
            Self::DELETE_KW => "'delete'",
            Self::EXPORT_KW => "'export'",
            Self::FALSE_KW => "'false'",
            Self::FLOAT_KW => "'float'",
            Self::FOREACH_KW => "'foreach'",
            Self::FROM_KW => "'from'",
            Self::IN_KW => "'in'",
            Self::INSERT_KW => "'insert'",
            Self::INT_KW => "'int'",
            Self::INTO_KW => "'into'",
            Self::LET_KW => "'let'",
            Self::LIMIT_KW => "'limit'",
            Self::NEXT_KW => "'next'",
            Self::NULL_KW => "'null'",
            Self::OTHERWISE_KW => "'otherwise'",
            Self::PRE_KW => "'pre'",
            Self::PRECONDITION_KW => "'precondition'",
            Self::RELATION_KW => "'Relation'",
            Self::SELECT_KW => "'select'",
            Self::SET_KW => "'set'",
            Self::STATE_KW => "'state'",
            Self::STRING_KW => "'string'",
            Self::TRUE_KW => "'true'",
            Self::TYPE_KW => "'type'",
            Self::UPDATE_KW => "'update'",
            Self::USE_KW => "'use'",
            Self::USES_KW => "'uses'",
            Self::VALUES_KW => "'values'",
            Self::WHEN_KW => "'when'",
            Self::WHERE_KW => "'where'",
            Self::ERROR => "invalid token",
            Self::EOF => "end of input",
        }
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
