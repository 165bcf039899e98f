use super::name::Name;

/// Built-in scalar types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveType {
    Int,
    Bool,
    String,
    Float,
}

impl PrimitiveType {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Float => "float",
        }
    }
}

/// A type annotation: `int`, `List[Acc]`, `Acc`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    Primitive(PrimitiveType),
    /// `base[param]`, exactly one parameter
    Generic { base: Name, param: Box<Type> },
    /// Reference to a user-declared type
    Named(Name),
}

impl Type {
    pub fn generic(base: Name, param: Type) -> Self {
        Self::Generic {
            base,
            param: Box::new(param),
        }
    }
}
