use text_size::TextRange;

use super::expressions::TlaExpr;
use super::name::{Name, NonEmpty, QualifiedName};
use super::statements::Statement;
use super::types::Type;

// ============================================================================
// PROGRAM
// ============================================================================

/// A parsed SCL document: its top-level declarations in source order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub declarations: Vec<Declaration>,
}

impl Program {
    pub fn types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Type(decl) => Some(decl),
            _ => None,
        })
    }

    pub fn contexts(&self) -> impl Iterator<Item = &ContextDecl> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Context(decl) => Some(decl),
            _ => None,
        })
    }

    pub fn states(&self) -> impl Iterator<Item = &StateDecl> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::State(decl) => Some(decl),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Declaration {
    Type(TypeDecl),
    Context(ContextDecl),
    State(StateDecl),
}

impl Declaration {
    pub fn name(&self) -> &Name {
        match self {
            Self::Type(decl) => &decl.name,
            Self::Context(decl) => &decl.name,
            Self::State(decl) => &decl.name,
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            Self::Type(decl) => decl.range,
            Self::Context(decl) => decl.range,
            Self::State(decl) => decl.range,
        }
    }
}

// ============================================================================
// FIELDS
// ============================================================================

/// `name: type;`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    pub name: Name,
    pub ty: Type,
}

pub type TypeField = Field;
pub type ContextField = Field;
pub type UseField = Field;
pub type ExportField = Field;

// ============================================================================
// TYPE / CONTEXT
// ============================================================================

/// `type Name { field: ty; ... }` with at least one field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDecl {
    pub name: Name,
    pub fields: NonEmpty<TypeField>,
    pub range: TextRange,
}

/// `context Name { field: ty; ... }`, possibly empty
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextDecl {
    pub name: Name,
    pub fields: Vec<ContextField>,
    pub range: TextRange,
}

// ============================================================================
// STATE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateDecl {
    pub name: Name,
    /// Entities this state operates over
    pub uses: NonEmpty<Name>,
    pub use_stmts: Vec<UseStmt>,
    pub precondition: Option<PreconditionBlock>,
    pub body: Vec<Statement>,
    pub next: NextBlock,
    pub range: TextRange,
}

/// Name introduction inside a state body
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UseStmt {
    /// `use state Src { field: ty; ... }`
    State {
        source: QualifiedName,
        fields: NonEmpty<UseField>,
    },
    /// `use context Ctx;`
    Context { context: QualifiedName },
    /// `use type T;`
    Type { ty: QualifiedName },
}

/// Which keyword opened a precondition block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PreconditionKeyword {
    #[default]
    Precondition,
    Pre,
}

impl PreconditionKeyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Precondition => "precondition",
            Self::Pre => "pre",
        }
    }
}

/// `precondition { cond; ... }`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreconditionBlock {
    pub keyword: PreconditionKeyword,
    pub conditions: NonEmpty<TlaExpr>,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// `next { case ... }`, the mandatory last element of a state body
///
/// Overlapping `when` guards and repeated `otherwise` cases are kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NextBlock {
    pub cases: NonEmpty<NextCase>,
}

/// Data exported along a transition edge: `{ export field: ty; ... }`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExportBlock {
    pub fields: NonEmpty<ExportField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NextCase {
    /// `when cond => Target [export]`
    When {
        condition: TlaExpr,
        target: Name,
        export: Option<ExportBlock>,
        range: TextRange,
    },
    /// `otherwise => Target [export]`
    Otherwise {
        target: Name,
        export: Option<ExportBlock>,
        range: TextRange,
    },
}

impl NextCase {
    pub fn target(&self) -> &Name {
        match self {
            Self::When { target, .. } | Self::Otherwise { target, .. } => target,
        }
    }

    pub fn export(&self) -> Option<&ExportBlock> {
        match self {
            Self::When { export, .. } | Self::Otherwise { export, .. } => export.as_ref(),
        }
    }

    pub fn condition(&self) -> Option<&TlaExpr> {
        match self {
            Self::When { condition, .. } => Some(condition),
            Self::Otherwise { .. } => None,
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            Self::When { range, .. } | Self::Otherwise { range, .. } => *range,
        }
    }
}
