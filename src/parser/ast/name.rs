use smol_str::SmolStr;
use std::fmt;
use std::ops::Deref;

// ============================================================================
// NAMES
// ============================================================================

/// An identifier as written in source. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(SmolStr);

impl Name {
    /// Create a name, rejecting the empty string
    pub fn new(text: impl AsRef<str>) -> Option<Self> {
        let text = text.as_ref();
        if text.is_empty() {
            None
        } else {
            Some(Self(SmolStr::new(text)))
        }
    }

    /// Build a name from the text of an `IDENT` token
    pub(crate) fn from_ident(text: &str) -> Self {
        debug_assert!(!text.is_empty(), "identifier tokens are never empty");
        Self(SmolStr::new(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Name {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Name {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = SmolStr::deserialize(deserializer)?;
        Name::new(text).ok_or_else(|| serde::de::Error::custom("name must not be empty"))
    }
}

/// A reference to a declared entity, optionally namespaced: `Acc` or `"bank"::Acc`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualifiedName {
    /// Raw contents of the namespace string, escapes kept verbatim
    pub namespace: Option<SmolStr>,
    pub name: Name,
}

impl QualifiedName {
    pub fn simple(name: Name) -> Self {
        Self {
            namespace: None,
            name,
        }
    }

    pub fn namespaced(namespace: impl Into<SmolStr>, name: Name) -> Self {
        Self {
            namespace: Some(namespace.into()),
            name,
        }
    }

    pub fn is_namespaced(&self) -> bool {
        self.namespace.is_some()
    }
}

// ============================================================================
// CARDINALITY
// ============================================================================

/// A sequence holding at least one element
///
/// The only constructors reject empty input, so a `repeat1` list in the tree
/// can never be observed empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmpty<T>(Vec<T>);

impl<T> NonEmpty<T> {
    /// Wrap a vector; returns `None` if it is empty
    pub fn new(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self(items))
        }
    }

    pub fn singleton(item: T) -> Self {
        Self(vec![item])
    }

    /// Build from a head element and any further elements
    pub fn from_parts(first: T, rest: Vec<T>) -> Self {
        let mut items = Vec::with_capacity(rest.len() + 1);
        items.push(first);
        items.extend(rest);
        Self(items)
    }

    pub fn first(&self) -> &T {
        &self.0[0]
    }

    pub fn last(&self) -> &T {
        &self.0[self.0.len() - 1]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for NonEmpty<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> IntoIterator for NonEmpty<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for NonEmpty<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for NonEmpty<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        NonEmpty::new(items).ok_or_else(|| serde::de::Error::custom("expected at least one element"))
    }
}
