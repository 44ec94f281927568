//! # Core Type Definitions
//!
//! Result and ledger types shared by the prover and the top-level queries:
//! - Trait maps (`Traits`)
//! - Evidence recorded per derived property (`Evidence`)
//! - Expanded justifications (`Proof`, `Contradiction`, `ProofOf`)
//! - Run outcomes (`Derivation`, `Deduction`)
//! - Error types (`DeduceError`)
//!
//! ## Determinism Guarantees
//!
//! Maps are `BTreeMap`s. Wherever the engine reports things "in order", that
//! order is kept explicitly in a `Vec`, never taken from hashing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

// =============================================================================
// TRAITS
// =============================================================================

/// The working belief state of one prover run: property -> known value.
///
/// A property absent from the map is unknown.
pub type Traits<P> = BTreeMap<P, bool>;

// =============================================================================
// EVIDENCE
// =============================================================================

/// Why a single non-given property holds its value.
///
/// `support` is not expanded: it may itself name derived properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence<T, P> {
    /// The value the property was forced to.
    pub value: bool,
    /// The theorem that forced it.
    pub theorem: T,
    /// The properties the theorem was applied to.
    pub support: Vec<P>,
}

// =============================================================================
// PROOF
// =============================================================================

/// A justification expanded down to first principles.
///
/// - `theorems`: every implication used, root first, in discovery order.
///   An id may repeat if it derived several properties on the way.
/// - `properties`: the given properties relied upon, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof<T, P> {
    pub theorems: Vec<T>,
    pub properties: Vec<P>,
}

impl<T, P> Proof<T, P> {
    /// Create a proof from its parts.
    #[must_use]
    pub fn new(theorems: Vec<T>, properties: Vec<P>) -> Self {
        Self {
            theorems,
            properties,
        }
    }
}

/// A proof that the assumptions and theorem set are jointly inconsistent.
pub type Contradiction<T, P> = Proof<T, P>;

/// Answer to "why does this property hold?".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofOf<T, P> {
    /// The property was an initial assumption.
    Given,
    /// The property was derived.
    Derived(Proof<T, P>),
}

// =============================================================================
// RUN OUTCOMES
// =============================================================================

/// A property whose value was not part of the given set, with its proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derivation<T, P> {
    pub property: P,
    pub value: bool,
    pub proof: Proof<T, P>,
}

/// The outcome of running a prover to its fixpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deduction<T, P> {
    /// The assumptions and theorems are inconsistent.
    Contradiction(Contradiction<T, P>),
    /// Every derived property, in the order it was derived.
    Derivations(Vec<Derivation<T, P>>),
}

impl<T, P> Deduction<T, P> {
    #[must_use]
    pub fn is_contradiction(&self) -> bool {
        matches!(self, Self::Contradiction(_))
    }

    /// Take the contradiction, if the run found one.
    #[must_use]
    pub fn into_contradiction(self) -> Option<Contradiction<T, P>> {
        match self {
            Self::Contradiction(contradiction) => Some(contradiction),
            Self::Derivations(_) => None,
        }
    }

    /// Take the derivations, if the run reached a fixpoint.
    #[must_use]
    pub fn into_derivations(self) -> Option<Vec<Derivation<T, P>>> {
        match self {
            Self::Contradiction(_) => None,
            Self::Derivations(derivations) => Some(derivations),
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Faults in the engine's inputs or ledger.
///
/// A contradiction is not an error, and neither is failing to find one.
/// These variants only cover inputs the engine cannot work with and broken
/// internal invariants. Ids are carried in their `Debug` rendering so the
/// error type stays independent of the caller's id types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeduceError {
    /// Two implications in one index share an id.
    #[error("Duplicate theorem id: {0}")]
    DuplicateTheorem(String),

    /// A property holds a value but is neither given nor backed by evidence.
    #[error("Property {0} has a value but no evidence")]
    MissingEvidence(String),

    /// Evidence was recorded twice for the same property.
    #[error("Evidence already recorded for property {0}")]
    EvidenceOverwrite(String),
}

// =============================================================================
// TESTS
// =============================================================================
