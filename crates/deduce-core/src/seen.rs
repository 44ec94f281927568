//! # Seen Set
//!
//! Visited-set discipline shared by every traversal in the engine.
//!
//! The work-list uses it as a pending set (a key is released once it has been
//! processed, so it may be queued again later). Proof expansion and property
//! collection use it as a plain visited set, which bounds them on cyclic or
//! diamond-shaped evidence.

use std::collections::BTreeSet;

/// A set of keys already reached by a traversal.
#[derive(Debug, Clone)]
pub struct Seen<K> {
    keys: BTreeSet<K>,
}

impl<K> Default for Seen<K> {
    fn default() -> Self {
        Self {
            keys: BTreeSet::new(),
        }
    }
}

impl<K: Ord> Seen<K> {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit. Returns `true` only the first time `key` is reached.
    pub fn visit(&mut self, key: K) -> bool {
        self.keys.insert(key)
    }

    /// Forget `key`, allowing it to be visited again.
    pub fn release(&mut self, key: &K) -> bool {
        self.keys.remove(key)
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visit_is_true_once() {
        let mut seen = Seen::new();
        assert!(seen.visit(3));
        assert!(!seen.visit(3));
        assert!(seen.contains(&3));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn release_allows_revisit() {
        let mut seen = Seen::new();
        assert!(seen.visit("P"));
        assert!(seen.release(&"P"));
        assert!(seen.is_empty());
        assert!(seen.visit("P"));
    }
}
