//! # Implication Module
//!
//! A proven `when => then` relation between formulas, labelled with an id
//! that the engine only echoes back in proofs.

use crate::formula::Formula;
use serde::{Deserialize, Serialize};

/// An implication `when => then`. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Implication<T, P> {
    pub id: T,
    pub when: Formula<P>,
    pub then: Formula<P>,
}

impl<T, P> Implication<T, P> {
    /// Create a new implication.
    #[must_use]
    pub fn new(id: T, when: Formula<P>, then: Formula<P>) -> Self {
        Self { id, when, then }
    }
}

impl<T: Clone, P: Clone> Implication<T, P> {
    /// The implication `then => when`, under the same id.
    #[must_use]
    pub fn converse(&self) -> Self {
        Self {
            id: self.id.clone(),
            when: self.then.clone(),
            then: self.when.clone(),
        }
    }
}

impl<T, P: Ord + Clone> Implication<T, P> {
    /// Properties of `when` followed by those of `then`.
    ///
    /// Deduplicated across both sides, first occurrence order.
    #[must_use]
    pub fn properties(&self) -> Vec<P> {
        let mut properties = self.when.properties();
        for property in self.then.properties() {
            if !properties.contains(&property) {
                properties.push(property);
            }
        }
        properties
    }
}
