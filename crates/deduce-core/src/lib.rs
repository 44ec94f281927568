//! # deduce-core
//!
//! A forward-chaining constraint-propagation engine over boolean properties.
//!
//! Given implications ("theorems") between formulas over named properties and
//! a set of known property values ("traits"), the engine computes every value
//! those force, detects contradictions, and explains each derived fact (or the
//! contradiction) by the chain of theorems and given properties it rests on.
//!
//! ## Layout
//!
//! Leaves first:
//! - `formula`: the `Formula` sum type, three-valued evaluation, negation
//! - `index`: `ImplicationIndex`, property -> implications mentioning it
//! - `queue`: the work-list of implications to examine
//! - `derivations`: the evidence ledger and proof expansion
//! - `prover`: one forward-chaining run (`force`, `run`)
//! - `queries`: `deduce_traits`, `disprove_formula`, `prove_theorem`
//!
//! ## Constraints
//!
//! - Pure and synchronous: no I/O, no async, no global state
//! - Deterministic: `BTreeMap`/`BTreeSet` only, explicit ordering elsewhere
//! - Incomplete by construction: no search, no backtracking

// =============================================================================
// MODULES
// =============================================================================

pub mod derivations;
pub mod formula;
pub mod implication;
pub mod index;
pub mod primitives;
pub mod prover;
pub mod queries;
pub mod queue;
pub mod seen;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    Contradiction, DeduceError, Deduction, Derivation, Evidence, Proof, ProofOf, Traits,
};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use derivations::Derivations;
pub use formula::Formula;
pub use implication::Implication;
pub use index::ImplicationIndex;
pub use prover::Prover;
pub use queries::{
    Certificate, Source, deduce_traits, disprove_formula, format_proof, prove_converse,
    prove_theorem,
};
pub use queue::Queue;
pub use seen::Seen;
