//! # Derivations Module
//!
//! The evidence ledger of one prover run.
//!
//! For every property that was not given, the ledger records the theorem that
//! forced it and the properties that theorem was applied to. Those supporting
//! properties may themselves be derived, so a full justification is only
//! assembled on demand by [`Derivations::expand`], which walks the evidence
//! back to given properties.

use crate::seen::Seen;
use crate::{DeduceError, Derivation, Evidence, Proof, ProofOf, Traits};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt::Debug;

/// Evidence ledger keyed by property.
#[derive(Debug, Clone)]
pub struct Derivations<T, P> {
    /// Properties supplied as initial assumptions.
    given: BTreeSet<P>,

    /// property -> evidence, for derived properties only
    evidence: BTreeMap<P, Evidence<T, P>>,

    /// Derived properties in the order they were recorded.
    order: Vec<P>,
}

impl<T, P> Derivations<T, P>
where
    T: Clone,
    P: Ord + Clone + Debug,
{
    /// Create a ledger whose given set is `given`.
    pub fn new(given: impl IntoIterator<Item = P>) -> Self {
        Self {
            given: given.into_iter().collect(),
            evidence: BTreeMap::new(),
            order: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_given(&self, property: &P) -> bool {
        self.given.contains(property)
    }

    /// Record that `theorem` forced `property` to `value`, supported by `support`.
    ///
    /// The caller checks the trait map first; a second record for the same
    /// property is refused with `DeduceError::EvidenceOverwrite`.
    pub fn add_evidence(
        &mut self,
        property: P,
        value: bool,
        theorem: T,
        support: Vec<P>,
    ) -> Result<(), DeduceError> {
        if self.evidence.contains_key(&property) {
            return Err(DeduceError::EvidenceOverwrite(format!("{property:?}")));
        }
        self.order.push(property.clone());
        self.evidence.insert(
            property,
            Evidence {
                value,
                theorem,
                support,
            },
        );
        Ok(())
    }

    #[must_use]
    pub fn evidence(&self, property: &P) -> Option<&Evidence<T, P>> {
        self.evidence.get(property)
    }

    /// Number of derived properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Expand `theorem` applied to `support` into a proof from given properties.
    ///
    /// Breadth-first over the evidence graph, each property visited once.
    /// Given properties become assumptions; derived ones contribute their
    /// theorem and queue their own support. Properties that are still unknown
    /// in `traits` carry no information and are skipped. A known property that
    /// is neither given nor derived means the ledger is broken, reported as
    /// `DeduceError::MissingEvidence`.
    pub fn expand(
        &self,
        theorem: T,
        support: &[P],
        traits: &Traits<P>,
    ) -> Result<Proof<T, P>, DeduceError> {
        let mut theorems = vec![theorem];
        let mut assumptions = Vec::new();
        let mut visited = Seen::new();
        let mut queue: VecDeque<&P> = support.iter().collect();

        while let Some(property) = queue.pop_front() {
            if !visited.visit(property) {
                continue;
            }

            if self.given.contains(property) {
                assumptions.push(property.clone());
            } else if let Some(evidence) = self.evidence.get(property) {
                theorems.push(evidence.theorem.clone());
                queue.extend(evidence.support.iter());
            } else if traits.contains_key(property) {
                return Err(DeduceError::MissingEvidence(format!("{property:?}")));
            }
        }

        Ok(Proof::new(theorems, assumptions))
    }

    /// Why `property` holds: given, derived (with its expanded proof), or `None`
    /// if it was never assigned.
    pub fn proof(
        &self,
        property: &P,
        traits: &Traits<P>,
    ) -> Result<Option<ProofOf<T, P>>, DeduceError> {
        if self.given.contains(property) {
            return Ok(Some(ProofOf::Given));
        }
        match self.evidence.get(property) {
            Some(evidence) => {
                let proof = self.expand(evidence.theorem.clone(), &evidence.support, traits)?;
                Ok(Some(ProofOf::Derived(proof)))
            }
            None => Ok(None),
        }
    }

    /// Every derived property with its expanded proof, in derivation order.
    pub fn all(&self, traits: &Traits<P>) -> Result<Vec<Derivation<T, P>>, DeduceError> {
        let mut derivations = Vec::with_capacity(self.order.len());
        for property in &self.order {
            let Some(evidence) = self.evidence.get(property) else {
                return Err(DeduceError::MissingEvidence(format!("{property:?}")));
            };
            let proof = self.expand(evidence.theorem.clone(), &evidence.support, traits)?;
            derivations.push(Derivation {
                property: property.clone(),
                value: evidence.value,
                proof,
            });
        }
        Ok(derivations)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Ledger for P given, Q <- 1[P], R <- 2[Q], S <- 3[Q, R].
    fn ledger() -> (Derivations<u32, &'static str>, Traits<&'static str>) {
        let mut derivations = Derivations::new(["P"]);
        derivations.add_evidence("Q", true, 1, vec!["P"]).expect("Q");
        derivations.add_evidence("R", true, 2, vec!["Q"]).expect("R");
        derivations.add_evidence("S", false, 3, vec!["Q", "R"]).expect("S");
        let traits = [("P", true), ("Q", true), ("R", true), ("S", false)]
            .into_iter()
            .collect();
        (derivations, traits)
    }

    #[test]
    fn expand_walks_back_to_given() {
        let (derivations, traits) = ledger();
        let proof = derivations.expand(9, &["R"], &traits).expect("expand");
        assert_eq!(proof, Proof::new(vec![9, 2, 1], vec!["P"]));
    }

    #[test]
    fn diamond_visited_once() {
        let (derivations, traits) = ledger();
        let proof = derivations.expand(9, &["S", "Q"], &traits).expect("expand");
        // S -> 3, Q -> 1, R -> 2, then P; Q is reached twice but expanded once
        assert_eq!(proof, Proof::new(vec![9, 3, 1, 2], vec!["P"]));
    }

    #[test]
    fn same_theorem_listed_per_property() {
        let mut derivations = Derivations::new(["P"]);
        derivations.add_evidence("Q", true, 1, vec!["P"]).expect("Q");
        derivations.add_evidence("R", true, 1, vec!["P"]).expect("R");
        let traits = [("P", true), ("Q", true), ("R", true)].into_iter().collect();

        let proof = derivations.expand(5, &["Q", "R"], &traits).expect("expand");
        assert_eq!(proof.theorems, vec![5, 1, 1]);
    }

    #[test]
    fn unknown_support_skipped() {
        let (derivations, traits) = ledger();
        let proof = derivations.expand(9, &["Z", "Q"], &traits).expect("expand");
        assert_eq!(proof, Proof::new(vec![9, 1], vec!["P"]));
    }

    #[test]
    fn known_property_without_evidence_is_an_error() {
        let (derivations, mut traits) = ledger();
        traits.insert("Z", true);
        let result = derivations.expand(9, &["Z"], &traits);
        assert_eq!(
            result,
            Err(DeduceError::MissingEvidence("\"Z\"".to_string()))
        );
    }

    #[test]
    fn evidence_is_never_overwritten() {
        let (mut derivations, _) = ledger();
        let result = derivations.add_evidence("Q", false, 4, vec![]);
        assert_eq!(
            result,
            Err(DeduceError::EvidenceOverwrite("\"Q\"".to_string()))
        );
        assert_eq!(derivations.evidence(&"Q").map(|e| e.value), Some(true));
    }

    #[test]
    fn proof_distinguishes_given_derived_and_unknown() {
        let (derivations, traits) = ledger();
        assert_eq!(derivations.proof(&"P", &traits), Ok(Some(ProofOf::Given)));
        assert_eq!(
            derivations.proof(&"Q", &traits),
            Ok(Some(ProofOf::Derived(Proof::new(vec![1], vec!["P"]))))
        );
        assert_eq!(derivations.proof(&"Z", &traits), Ok(None));
    }

    #[test]
    fn all_in_derivation_order() {
        let (derivations, traits) = ledger();
        let all = derivations.all(&traits).expect("all");
        let properties: Vec<&str> = all.iter().map(|d| d.property).collect();
        assert_eq!(properties, vec!["Q", "R", "S"]);
        assert!(!all[2].value);
        assert_eq!(derivations.len(), 3);
    }
}
