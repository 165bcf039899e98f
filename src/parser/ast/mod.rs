//! Typed, owned syntax tree for SCL documents.
//!
//! Every grammar choice is a closed enum, every optional clause an `Option`,
//! and every one-or-more list a [`NonEmpty`]. Nodes own their children and are
//! never mutated after the parser builds them.
//!
//! Declarations, statements and `next` cases carry the byte range they were
//! parsed from; expressions and types do not.

mod declarations;
mod expressions;
mod name;
mod statements;
mod types;

pub use declarations::*;
pub use expressions::*;
pub use name::{Name, NonEmpty, QualifiedName};
pub use statements::*;
pub use types::*;
