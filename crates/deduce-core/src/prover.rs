//! # Prover
//!
//! One forward-chaining run over an implication index.
//!
//! A prover owns everything that changes during a run: the trait map, the
//! work-list and the evidence ledger. It is created per query and dropped
//! when the query returns; only the index is shared.
//!
//! ## Run states
//!
//! - running: the queue is non-empty and no contradiction was found
//! - drained: the queue is empty, the trait map is a fixpoint
//! - contradicted: a contradiction was returned (terminal)
//!
//! Each property is assigned at most once, and an implication is only
//! re-queued when one of its properties is assigned, so a run is bounded by
//! properties x implications-per-property applications.
//!
//! ## Incompleteness
//!
//! A disjunction with two or more undetermined branches is never forced.
//! The prover does not search or backtrack, so it may miss proofs that exist.

use crate::derivations::Derivations;
use crate::formula::Formula;
use crate::implication::Implication;
use crate::index::ImplicationIndex;
use crate::primitives::targets;
use crate::queue::Queue;
use crate::{Contradiction, DeduceError, Deduction, ProofOf, Traits};
use std::fmt::Debug;

/// Forward-chaining state for a single query.
///
/// - `T`: theorem ids in the index
/// - `P`: property ids
/// - `L`: labels recorded as evidence; any `L: From<T>`, so forcing queries can
///   add a synthetic label (see [`crate::Source`]) next to real theorem ids
#[derive(Debug)]
pub struct Prover<'a, T, P, L = T> {
    traits: Traits<P>,
    derivations: Derivations<L, P>,
    queue: Queue<'a, T, P>,
}

impl<'a, T, P, L> Prover<'a, T, P, L>
where
    T: Clone + Debug,
    P: Ord + Clone + Debug,
    L: Clone + Debug + From<T>,
{
    /// Create a prover with no initial traits.
    #[must_use]
    pub fn new(index: &'a ImplicationIndex<T, P>) -> Self {
        Self::with_traits(index, Traits::new())
    }

    /// Create a prover whose given set is `traits`.
    ///
    /// Every given property is marked, so the first `run` examines every
    /// implication that mentions one.
    #[must_use]
    pub fn with_traits(index: &'a ImplicationIndex<T, P>, traits: Traits<P>) -> Self {
        let derivations = Derivations::new(traits.keys().cloned());
        let mut queue = Queue::new(index);
        for property in traits.keys() {
            queue.mark(property);
        }

        Self {
            traits,
            derivations,
            queue,
        }
    }

    /// The current trait map (given and derived).
    #[must_use]
    pub fn traits(&self) -> &Traits<P> {
        &self.traits
    }

    /// Drain the work-list to a fixpoint.
    ///
    /// Stops at the first contradiction. Otherwise returns every derived
    /// property with its proof, in the order the properties were derived.
    pub fn run(&mut self) -> Result<Deduction<L, P>, DeduceError> {
        while let Some(implication) = self.queue.shift() {
            if let Some(contradiction) = self.apply(implication)? {
                tracing::debug!(
                    target: targets::PROVER,
                    theorems = ?contradiction.theorems,
                    properties = ?contradiction.properties,
                    "contradiction"
                );
                return Ok(Deduction::Contradiction(contradiction));
            }
        }

        tracing::debug!(
            target: targets::PROVER,
            known = self.traits.len(),
            derived = self.derivations.len(),
            "fixpoint reached"
        );
        Ok(Deduction::Derivations(self.derivations.all(&self.traits)?))
    }

    /// Why `property` holds, if it does.
    pub fn proof(&self, property: &P) -> Result<Option<ProofOf<L, P>>, DeduceError> {
        self.derivations.proof(property, &self.traits)
    }

    /// Assert that `formula` must hold, attributed to `theorem` applied to `support`.
    ///
    /// Returns `Ok(None)` on success (which includes forcing nothing) or the
    /// contradiction the assertion runs into.
    pub fn force(
        &mut self,
        theorem: L,
        formula: &Formula<P>,
        support: &[P],
    ) -> Result<Option<Contradiction<L, P>>, DeduceError> {
        match formula {
            Formula::Atom { property, value } => {
                self.force_atom(theorem, property, *value, support)
            }
            Formula::And(subs) => {
                for sub in subs {
                    if let Some(contradiction) = self.force(theorem.clone(), sub, support)? {
                        return Ok(Some(contradiction));
                    }
                }
                Ok(None)
            }
            Formula::Or(subs) => self.force_or(theorem, subs, support),
        }
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    /// Modus ponens on a true premise, modus tollens on a false conclusion.
    fn apply(
        &mut self,
        implication: &Implication<T, P>,
    ) -> Result<Option<Contradiction<L, P>>, DeduceError> {
        let when = implication.when.evaluate(&self.traits);
        let then = implication.then.evaluate(&self.traits);
        tracing::trace!(target: targets::PROVER, id = ?implication.id, ?when, ?then, "apply");

        let theorem = L::from(implication.id.clone());
        match (when, then) {
            (Some(true), Some(false)) => {
                let mut properties = implication.when.properties();
                properties.extend(implication.then.properties());
                self.contradiction(theorem, &properties).map(Some)
            }
            (Some(true), _) => {
                self.force(theorem, &implication.then, &implication.when.properties())
            }
            (_, Some(false)) => self.force(
                theorem,
                &implication.when.negate(),
                &implication.then.properties(),
            ),
            _ => Ok(None),
        }
    }

    fn force_atom(
        &mut self,
        theorem: L,
        property: &P,
        value: bool,
        support: &[P],
    ) -> Result<Option<Contradiction<L, P>>, DeduceError> {
        match self.traits.get(property).copied() {
            Some(known) if known != value => self
                .contradiction(theorem, std::slice::from_ref(property))
                .map(Some),
            Some(_) => Ok(None),
            None => {
                tracing::debug!(target: targets::PROVER, ?property, value, ?theorem, "forced");
                self.traits.insert(property.clone(), value);
                self.derivations
                    .add_evidence(property.clone(), value, theorem, support.to_vec())?;
                self.queue.mark(property);
                Ok(None)
            }
        }
    }

    /// Force a disjunction only when exactly one branch is still open.
    ///
    /// A true branch satisfies it, two open branches leave it undetermined,
    /// and all-false branches contradict. The single open branch is forced
    /// with the false branches' properties appended to `support`, duplicates
    /// kept.
    fn force_or(
        &mut self,
        theorem: L,
        subs: &[Formula<P>],
        support: &[P],
    ) -> Result<Option<Contradiction<L, P>>, DeduceError> {
        let mut falses = Vec::new();
        let mut open = None;

        for sub in subs {
            match sub.evaluate(&self.traits) {
                Some(true) => return Ok(None),
                Some(false) => falses.push(sub),
                None if open.is_some() => return Ok(None),
                None => open = Some(sub),
            }
        }

        let false_properties: Vec<P> = falses.iter().flat_map(|sub| sub.properties()).collect();
        match open {
            None => self.contradiction(theorem, &false_properties).map(Some),
            Some(sub) => {
                let mut extended = support.to_vec();
                extended.extend(false_properties);
                self.force(theorem, sub, &extended)
            }
        }
    }

    fn contradiction(
        &self,
        theorem: L,
        properties: &[P],
    ) -> Result<Contradiction<L, P>, DeduceError> {
        self.derivations.expand(theorem, properties, &self.traits)
    }
}

// =============================================================================
// TESTS
// =============================================================================
