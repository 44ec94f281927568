//! # Implication Index
//!
//! Read-only map from a property to every implication mentioning it.
//!
//! Built once per theorem set and never mutated afterwards, so any number of
//! provers (on any number of threads) may share one index by reference.

use crate::DeduceError;
use crate::implication::Implication;
use crate::seen::Seen;
use std::collections::BTreeMap;
use std::fmt::Debug;

const NO_IMPLICATIONS: &[usize] = &[];

/// Implications in input order, bucketed by the properties they mention.
#[derive(Debug, Clone)]
pub struct ImplicationIndex<T, P> {
    /// Implications in input order. Buckets refer to positions in this list.
    implications: Vec<Implication<T, P>>,

    /// property -> positions of implications mentioning it (ascending, no duplicates)
    by_property: BTreeMap<P, Vec<usize>>,
}

impl<T, P> Default for ImplicationIndex<T, P> {
    fn default() -> Self {
        Self {
            implications: Vec::new(),
            by_property: BTreeMap::new(),
        }
    }
}

impl<T, P> ImplicationIndex<T, P>
where
    T: Ord + Debug,
    P: Ord + Clone,
{
    /// Build the index in one pass over `implications`.
    ///
    /// Returns `DeduceError::DuplicateTheorem` if two implications share an id.
    pub fn new(implications: Vec<Implication<T, P>>) -> Result<Self, DeduceError> {
        let mut ids = Seen::new();
        for implication in &implications {
            if !ids.visit(&implication.id) {
                return Err(DeduceError::DuplicateTheorem(format!(
                    "{:?}",
                    implication.id
                )));
            }
        }

        let mut by_property: BTreeMap<P, Vec<usize>> = BTreeMap::new();
        for (position, implication) in implications.iter().enumerate() {
            for property in implication.properties() {
                by_property.entry(property).or_default().push(position);
            }
        }

        Ok(Self {
            implications,
            by_property,
        })
    }
}

impl<T, P: Ord> ImplicationIndex<T, P> {
    /// Create an index with no implications.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Implications mentioning `property`, in input order.
    pub fn find(&self, property: &P) -> impl Iterator<Item = &Implication<T, P>> {
        self.positions(property)
            .iter()
            .filter_map(|&position| self.implications.get(position))
    }

    /// Positions (into input order) of the implications mentioning `property`.
    pub(crate) fn positions(&self, property: &P) -> &[usize] {
        self.by_property
            .get(property)
            .map_or(NO_IMPLICATIONS, Vec::as_slice)
    }

    pub(crate) fn get(&self, position: usize) -> Option<&Implication<T, P>> {
        self.implications.get(position)
    }

    /// All implications, in input order.
    pub fn iter(&self) -> impl Iterator<Item = &Implication<T, P>> {
        self.implications.iter()
    }

    /// Number of implications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.implications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.implications.is_empty()
    }

    /// Number of distinct properties mentioned by any implication.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.by_property.len()
    }
}

// =============================================================================
// TESTS
// =============================================================================
