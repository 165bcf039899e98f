use text_size::TextRange;

use super::expressions::Expr;
use super::name::{Name, NonEmpty};
use super::types::Type;

/// `field = value` in an `update ... set` list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub field: Name,
    pub value: Expr,
}

/// A statement inside a state body or a `foreach` body
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statement {
    pub kind: StmtKind,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StmtKind {
    /// `let name: ty = value;`
    Let { name: Name, ty: Type, value: Expr },
    /// `select name: ty from entity [where e] [limit n];`
    Select {
        name: Name,
        ty: Type,
        entity: Name,
        where_clause: Option<Expr>,
        limit: Option<u64>,
    },
    /// `foreach item: item_type in collection { body }`
    Foreach {
        item: Name,
        item_type: Type,
        collection: Name,
        body: Vec<Statement>,
    },
    /// `update entity set a = e, ... [where e];`
    Update {
        entity: Name,
        assignments: NonEmpty<Assignment>,
        where_clause: Option<Expr>,
    },
    /// `insert into entity (columns) values (values);`
    ///
    /// Column and value counts are not compared here.
    Insert {
        entity: Name,
        columns: Vec<Name>,
        values: Vec<Expr>,
    },
    /// `delete from entity [where e];`
    Delete {
        entity: Name,
        where_clause: Option<Expr>,
    },
    /// `assert e;`
    Assert { expr: Expr },
    /// `commit;`
    Commit,
}

impl StmtKind {
    /// The leading keyword of this statement
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Let { .. } => "let",
            Self::Select { .. } => "select",
            Self::Foreach { .. } => "foreach",
            Self::Update { .. } => "update",
            Self::Insert { .. } => "insert",
            Self::Delete { .. } => "delete",
            Self::Assert { .. } => "assert",
            Self::Commit => "commit",
        }
    }
}
