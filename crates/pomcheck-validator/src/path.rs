//! # Field Paths
//!
//! Dotted paths naming the descriptor field a finding is about, e.g.
//! `modelVersion`, `dependencies.dependency.version`, or
//! `build.testResources.testResource.directory`.
//!
//! Paths are composed, never spelled out per rule: a collection contributes
//! its name plus the singular name of its elements, and the field is
//! appended last. The same required-field check therefore produces
//! `groupId` at the top level and `dependencies.dependency.groupId` inside a
//! collection without knowing where it runs.

use std::fmt;

/// A dotted path to a descriptor field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    /// A path made of a single top-level segment (`modelVersion`, `build`).
    pub fn root(segment: &str) -> Self {
        Self(segment.to_string())
    }

    /// The elements of a top-level collection: `collection.singular`.
    pub fn collection(collection: &str, singular: &str) -> Self {
        Self::root(collection).field(singular)
    }

    /// Append a field name.
    pub fn field(&self, name: &str) -> Self {
        Self(format!("{}.{name}", self.0))
    }

    /// Descend into a nested collection: `self.collection.singular`.
    pub fn nested(&self, collection: &str, singular: &str) -> Self {
        self.field(collection).field(singular)
    }

    /// Address one element of this path by position: `path[index]`.
    pub fn indexed(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    /// The dotted path text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
