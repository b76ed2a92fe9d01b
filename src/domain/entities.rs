//! Domain entities: core data structures

use std::fmt;

/// Opaque clade identifier.
///
/// Newtype over the raw identifier token so that ids cannot be confused with
/// display names or line numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CladeId(String);

impl CladeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CladeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CladeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CladeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One flat monolith record.
///
/// `parent == None` marks the root. The on-disk sentinel token is translated
/// at the I/O boundary; the domain never sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: CladeId,
    pub parent: Option<CladeId>,
    /// Display name, may be empty or contain internal whitespace
    pub name: String,
}

impl Record {
    pub fn new(id: impl Into<CladeId>, parent: Option<CladeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent,
            name: name.into(),
        }
    }
}

/// Fully linked tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Parent clade, None for the root
    pub parent: Option<CladeId>,
    /// Display name
    pub name: String,
    /// Child clades in discovery order (not semantically meaningful)
    pub children: Vec<CladeId>,
}
