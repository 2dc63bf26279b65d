//! Append-only, deduplicated declaration collection.

use std::collections::HashSet;

use super::sort::sort_natural;

/// An ordered set of formatted declarations for one output block.
///
/// Pushing is append-only and idempotent: a declaration string already present
/// is ignored. Insertion order is kept; [`sorted`](Bucket::sorted) returns the
/// natural ordering used for output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bucket {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl Bucket {
    /// Creates an empty bucket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration, returning false if it was already present.
    pub fn push(&mut self, declaration: impl Into<String>) -> bool {
        let declaration = declaration.into();
        if self.seen.contains(&declaration) {
            return false;
        }
        self.seen.insert(declaration.clone());
        self.entries.push(declaration);
        true
    }

    /// Returns true if the exact declaration string is present.
    pub fn contains(&self, declaration: &str) -> bool {
        self.seen.contains(declaration)
    }

    /// Returns declarations in insertion order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns a naturally sorted copy of the declarations.
    pub fn sorted(&self) -> Vec<String> {
        let mut sorted = self.entries.clone();
        sort_natural(&mut sorted);
        sorted
    }

    /// Returns the number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no declarations were pushed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
