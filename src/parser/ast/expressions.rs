use smol_str::SmolStr;

use super::name::{Name, NonEmpty};

// ============================================================================
// OPERATORS
// ============================================================================

/// Binary operators of value expressions
///
/// `=` and `==` both parse to [`BinaryOp::Eq`]; `!=` and `#` both parse to
/// [`BinaryOp::Neq`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    Eq,
    Neq,
    Lt,
    Le,
    Gt,
    Ge,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Canonical source spelling
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Neq => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    /// `!`
    Not,
    /// `-`
    Neg,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Neg => "-",
        }
    }
}

/// Binary connectives of the TLA+ condition subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TlaBinaryOp {
    /// `=>`
    Implies,
    /// `\/`
    Or,
    /// `/\`
    And,
}

impl TlaBinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Implies => "=>",
            Self::Or => "\\/",
            Self::And => "/\\",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TlaUnaryOp {
    /// `~`
    Not,
}

impl TlaUnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Not => "~",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuantifierKind {
    /// `\E`
    Exists,
    /// `\A`
    ForAll,
}

impl QuantifierKind {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Exists => "\\E",
            Self::ForAll => "\\A",
        }
    }
}

// ============================================================================
// VALUE EXPRESSIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    Number(u64),
    /// Raw contents between the quotes; escapes are not decoded
    String(SmolStr),
    Boolean(bool),
    Null,
}

/// `name: value` inside a struct literal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructField {
    pub name: Name,
    pub value: Expr,
}

/// A value expression. Parentheses are not kept in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    /// `object.field`, a single hop
    FieldAccess { object: Name, field: Name },
    StructLiteral { fields: NonEmpty<StructField> },
    Identifier(Name),
    Literal(Literal),
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Self::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn ident(name: Name) -> Self {
        Self::Identifier(name)
    }

    pub fn number(value: u64) -> Self {
        Self::Literal(Literal::Number(value))
    }
}

// ============================================================================
// CONDITIONS (TLA+ SUBSET)
// ============================================================================

/// A condition: TLA+ connectives and quantifiers over value expressions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TlaExpr {
    Binary {
        op: TlaBinaryOp,
        left: Box<TlaExpr>,
        right: Box<TlaExpr>,
    },
    Unary {
        op: TlaUnaryOp,
        operand: Box<TlaExpr>,
    },
    /// `\E Relation R x by k : body`
    Quantifier {
        kind: QuantifierKind,
        relation: Name,
        var: Name,
        /// Primary-key binding, checked semantically
        binding: Expr,
        body: Box<TlaExpr>,
    },
    Expr(Expr),
}

impl TlaExpr {
    pub fn binary(op: TlaBinaryOp, left: TlaExpr, right: TlaExpr) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn not(operand: TlaExpr) -> Self {
        Self::Unary {
            op: TlaUnaryOp::Not,
            operand: Box::new(operand),
        }
    }

    /// The wrapped value expression, if this condition is a plain expression
    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Self::Expr(expr) => Some(expr),
            _ => None,
        }
    }
}

impl From<Expr> for TlaExpr {
    fn from(expr: Expr) -> Self {
        Self::Expr(expr)
    }
}
