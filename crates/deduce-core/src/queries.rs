//! # Queries
//!
//! The entry points: thin orchestration over one prover per call.
//!
//! - [`deduce_traits`]: everything that follows from a set of traits
//! - [`disprove_formula`]: is a formula unsatisfiable under the theorems?
//! - [`prove_theorem`]: is `when => then` entailed by the theorems?
//! - [`prove_converse`]: is the converse of an implication entailed?
//!
//! The forcing queries assert formulas under the synthetic [`Source::Given`]
//! label and look for a contradiction. Finding none is "no result", which
//! reflects the engine's incompleteness, not an error.

use crate::formula::Formula;
use crate::implication::Implication;
use crate::index::ImplicationIndex;
use crate::primitives::{GIVEN, TAUTOLOGY, targets};
use crate::prover::Prover;
use crate::{Contradiction, DeduceError, Deduction, Proof, Traits};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{self, Debug, Display};

// =============================================================================
// LABELS & RESULTS
// =============================================================================

/// Who asserted a fact: the query itself, or a theorem.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source<T> {
    Given,
    Theorem(T),
}

impl<T> From<T> for Source<T> {
    fn from(id: T) -> Self {
        Self::Theorem(id)
    }
}

impl<T: Display> Display for Source<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Given => f.write_str(GIVEN),
            Self::Theorem(id) => write!(f, "{id}"),
        }
    }
}

/// A found proof, reduced to the theorems it used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Certificate<T> {
    /// No theorem was needed: the asserted formula contradicts itself.
    Tautology,
    /// Theorem ids, root first.
    Theorems(Vec<T>),
}

impl<T> Certificate<T> {
    #[must_use]
    pub fn is_tautology(&self) -> bool {
        matches!(self, Self::Tautology)
    }

    /// The theorems used; empty for a tautology.
    #[must_use]
    pub fn theorems(&self) -> &[T] {
        match self {
            Self::Tautology => &[],
            Self::Theorems(ids) => ids,
        }
    }
}

impl<T: Display> Display for Certificate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tautology => f.write_str(TAUTOLOGY),
            Self::Theorems(ids) => {
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{id}")?;
                }
                Ok(())
            }
        }
    }
}

/// `"tautology"` or the list of theorem ids.
impl<T: Serialize> Serialize for Certificate<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Tautology => serializer.serialize_str(TAUTOLOGY),
            Self::Theorems(ids) => ids.serialize(serializer),
        }
    }
}

/// Drop the synthetic `Given` label; no theorem left means a tautology.
#[must_use]
pub fn format_proof<T, P>(proof: Proof<Source<T>, P>) -> Certificate<T> {
    let theorems: Vec<T> = proof
        .theorems
        .into_iter()
        .filter_map(|source| match source {
            Source::Given => None,
            Source::Theorem(id) => Some(id),
        })
        .collect();

    if theorems.is_empty() {
        Certificate::Tautology
    } else {
        Certificate::Theorems(theorems)
    }
}

// =============================================================================
// QUERIES
// =============================================================================

/// Derive everything that follows from `traits`, or find a contradiction.
pub fn deduce_traits<T, P>(
    index: &ImplicationIndex<T, P>,
    traits: Traits<P>,
) -> Result<Deduction<T, P>, DeduceError>
where
    T: Clone + Debug,
    P: Ord + Clone + Debug,
{
    tracing::debug!(target: targets::QUERIES, given = traits.len(), "deduce traits");
    Prover::<T, P, T>::with_traits(index, traits).run()
}

/// Try to show that `formula` cannot hold under the theorems.
///
/// Forces the formula and runs to a fixpoint. `Ok(None)` means no
/// contradiction was found: the formula may be satisfiable, or it may need
/// a disjunction the engine cannot resolve.
pub fn disprove_formula<T, P>(
    index: &ImplicationIndex<T, P>,
    formula: &Formula<P>,
) -> Result<Option<Certificate<T>>, DeduceError>
where
    T: Clone + Debug,
    P: Ord + Clone + Debug,
{
    tracing::debug!(target: targets::QUERIES, ?formula, "disprove formula");
    let mut prover: Prover<'_, T, P, Source<T>> = Prover::new(index);
    Ok(assert_and_run(&mut prover, formula)?.map(format_proof))
}

/// Try to show that `when => then` follows from the theorems.
///
/// Runs two phases on one prover: force `when` and run, then force `~then`
/// and run. Forcing `when + ~then` in one go would leave a disjunctive
/// `~then` unresolved more often; even so, `A | B => C + D` stays out of reach.
pub fn prove_theorem<T, P>(
    index: &ImplicationIndex<T, P>,
    when: &Formula<P>,
    then: &Formula<P>,
) -> Result<Option<Certificate<T>>, DeduceError>
where
    T: Clone + Debug,
    P: Ord + Clone + Debug,
{
    tracing::debug!(target: targets::QUERIES, ?when, ?then, "prove theorem");
    let mut prover: Prover<'_, T, P, Source<T>> = Prover::new(index);

    if let Some(contradiction) = assert_and_run(&mut prover, when)? {
        return Ok(Some(format_proof(contradiction)));
    }
    Ok(assert_and_run(&mut prover, &then.negate())?.map(format_proof))
}

/// Try to show that the converse `then => when` of `implication` holds.
pub fn prove_converse<T, P>(
    index: &ImplicationIndex<T, P>,
    implication: &Implication<T, P>,
) -> Result<Option<Certificate<T>>, DeduceError>
where
    T: Clone + Debug,
    P: Ord + Clone + Debug,
{
    prove_theorem(index, &implication.then, &implication.when)
}

/// One forcing phase: assert `formula` as given, then run to a fixpoint.
fn assert_and_run<T, P>(
    prover: &mut Prover<'_, T, P, Source<T>>,
    formula: &Formula<P>,
) -> Result<Option<Contradiction<Source<T>, P>>, DeduceError>
where
    T: Clone + Debug,
    P: Ord + Clone + Debug,
{
    if let Some(contradiction) = prover.force(Source::Given, formula, &[])? {
        return Ok(Some(contradiction));
    }
    Ok(prover.run()?.into_contradiction())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    type Index = ImplicationIndex<u32, &'static str>;

    fn atom(property: &'static str) -> Formula<&'static str> {
        Formula::atom(property, true)
    }

    fn index(theorems: Vec<(Formula<&'static str>, Formula<&'static str>)>) -> Index {
        let implications = theorems
            .into_iter()
            .zip(1u32..)
            .map(|((when, then), id)| Implication::new(id, when, then))
            .collect();
        ImplicationIndex::new(implications).expect("index")
    }

    #[test]
    fn format_proof_strips_given() {
        let proof: Proof<Source<u32>, &str> = Proof::new(
            vec![Source::Given, Source::Theorem(4), Source::Theorem(3), Source::Given],
            vec![],
        );
        assert_eq!(format_proof(proof), Certificate::Theorems(vec![4, 3]));
    }

    #[test]
    fn format_proof_without_theorems_is_tautology() {
        let proof: Proof<Source<u32>, &str> = Proof::new(vec![Source::Given, Source::Given], vec![]);
        assert_eq!(format_proof(proof), Certificate::Tautology);
    }

    #[test]
    fn disprove_direct_contradiction() {
        let index = index(vec![(atom("P"), atom("Q"))]);
        let formula = Formula::and(vec![atom("P"), Formula::atom("Q", false)]);

        let result = disprove_formula(&index, &formula).expect("disprove");
        assert_eq!(result, Some(Certificate::Theorems(vec![1])));
    }

    #[test]
    fn disprove_self_contradiction_is_tautology() {
        let formula = Formula::and(vec![atom("P"), Formula::atom("P", false)]);
        let result = disprove_formula(&Index::empty(), &formula).expect("disprove");
        assert_eq!(result, Some(Certificate::Tautology));
    }

    #[test]
    fn disprove_undecided_disjunction_gives_no_result() {
        let index = index(vec![(atom("A"), atom("C")), (atom("B"), atom("C"))]);
        let formula = Formula::and(vec![
            Formula::or(vec![atom("A"), atom("B")]),
            Formula::atom("C", false),
        ]);

        // ~C refutes both branches, but the disjunction was forced while both
        // were open and is never revisited.
        let result = disprove_formula(&index, &formula).expect("disprove");
        assert_eq!(result, None);
    }

    #[test]
    fn prove_converse_swaps_sides() {
        let index = index(vec![(atom("P"), atom("Q")), (atom("Q"), atom("P"))]);
        let implication = Implication::new(1, atom("P"), atom("Q"));

        let result = prove_converse(&index, &implication).expect("prove");
        assert_eq!(result, Some(Certificate::Theorems(vec![2])));
    }

    #[test]
    fn certificate_rendering() {
        let tautology: Certificate<u32> = Certificate::Tautology;
        assert_eq!(tautology.to_string(), "tautology");
        assert_eq!(
            serde_json::to_string(&tautology).expect("serialize"),
            "\"tautology\""
        );
        assert!(tautology.theorems().is_empty());

        let theorems = Certificate::Theorems(vec![4, 3]);
        assert_eq!(theorems.to_string(), "4, 3");
        assert_eq!(serde_json::to_string(&theorems).expect("serialize"), "[4,3]");
        assert!(!theorems.is_tautology());
    }

    #[test]
    fn source_display() {
        assert_eq!(Source::<u32>::Given.to_string(), "given");
        assert_eq!(Source::Theorem(7u32).to_string(), "7");
    }
}
