//! # Knowledge
//!
//! A theorem file resolved into an engine index.
//!
//! Theorem files name properties with strings. They are interned to dense
//! `u32` ids in name order before the index is built, so the engine works on
//! small `Copy` ids and the order it visits given traits matches the order
//! of their names. Results are mapped back to names on the way out.

use crate::error::CliError;
use deduce_core::{
    Certificate, Deduction, Derivation, Formula, Implication, ImplicationIndex, Proof, Traits,
    deduce_traits, disprove_formula, prove_converse, prove_theorem,
};
use std::collections::{BTreeMap, BTreeSet};

pub type PropertyId = u32;
pub type TheoremId = String;

/// A theorem as written in a theorem file: `{"id": ..., "when": ..., "then": ...}`.
pub type TheoremRecord = Implication<TheoremId, String>;

// =============================================================================
// VOCABULARY
// =============================================================================

/// Property name <-> id mapping.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    ids: BTreeMap<String, PropertyId>,
    names: Vec<String>,
}

impl Vocabulary {
    /// The id of `name`, assigning the next free id on first sight.
    pub fn intern(&mut self, name: &str) -> Result<PropertyId, CliError> {
        if name.is_empty() {
            return Err(CliError::Parse("empty property name".to_string()));
        }
        if let Some(&id) = self.ids.get(name) {
            return Ok(id);
        }

        let id = PropertyId::try_from(self.names.len())
            .map_err(|_| CliError::Parse("too many distinct properties".to_string()))?;
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        Ok(id)
    }

    /// The name behind `id`; empty for ids this vocabulary never handed out.
    #[must_use]
    pub fn name(&self, id: PropertyId) -> &str {
        self.names.get(id as usize).map_or("", String::as_str)
    }

    pub fn resolve(&mut self, formula: &Formula<String>) -> Result<Formula<PropertyId>, CliError> {
        formula.try_map_properties(|name| self.intern(name))
    }

    #[must_use]
    pub fn render(&self, formula: &Formula<PropertyId>) -> Formula<String> {
        formula.map_properties(|&id| self.name(id).to_string())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn render_proof<T>(&self, proof: Proof<T, PropertyId>) -> Proof<T, String> {
        Proof::new(
            proof.theorems,
            proof
                .properties
                .into_iter()
                .map(|id| self.name(id).to_string())
                .collect(),
        )
    }
}

// =============================================================================
// KNOWLEDGE
// =============================================================================

/// A loaded theorem set, ready for queries.
#[derive(Debug)]
pub struct Knowledge {
    index: ImplicationIndex<TheoremId, PropertyId>,
    vocabulary: Vocabulary,
}

impl Knowledge {
    /// Intern every property name, then build the index.
    ///
    /// Returns `CliError::Engine(DuplicateTheorem)` if two records share an id.
    pub fn from_records(records: Vec<TheoremRecord>) -> Result<Self, CliError> {
        let names: BTreeSet<String> = records.iter().flat_map(|r| r.properties()).collect();
        let mut vocabulary = Vocabulary::default();
        for name in &names {
            vocabulary.intern(name)?;
        }

        let mut implications = Vec::with_capacity(records.len());
        for record in records {
            let when = vocabulary.resolve(&record.when)?;
            let then = vocabulary.resolve(&record.then)?;
            implications.push(Implication::new(record.id, when, then));
        }

        Ok(Self {
            index: ImplicationIndex::new(implications)?,
            vocabulary,
        })
    }

    /// Parse a JSON list of theorem records.
    pub fn from_json(bytes: &[u8]) -> Result<Self, CliError> {
        let records: Vec<TheoremRecord> = serde_json::from_slice(bytes)
            .map_err(|e| CliError::Parse(format!("Invalid theorem file: {}", e)))?;
        Self::from_records(records)
    }

    #[must_use]
    pub fn index(&self) -> &ImplicationIndex<TheoremId, PropertyId> {
        &self.index
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Look up a theorem by id.
    pub fn theorem(&self, id: &str) -> Result<&Implication<TheoremId, PropertyId>, CliError> {
        self.index
            .iter()
            .find(|implication| implication.id == id)
            .ok_or_else(|| CliError::UnknownTheorem(id.to_string()))
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Everything that follows from `given`, with property names restored.
    pub fn deduce(
        &mut self,
        given: &BTreeMap<String, bool>,
    ) -> Result<Deduction<TheoremId, String>, CliError> {
        let mut traits = Traits::new();
        for (name, &value) in given {
            traits.insert(self.vocabulary.intern(name)?, value);
        }

        let deduction = match deduce_traits(&self.index, traits)? {
            Deduction::Contradiction(contradiction) => {
                Deduction::Contradiction(self.vocabulary.render_proof(contradiction))
            }
            Deduction::Derivations(derivations) => Deduction::Derivations(
                derivations
                    .into_iter()
                    .map(|d| Derivation {
                        property: self.vocabulary.name(d.property).to_string(),
                        value: d.value,
                        proof: self.vocabulary.render_proof(d.proof),
                    })
                    .collect(),
            ),
        };
        Ok(deduction)
    }

    pub fn disprove(
        &mut self,
        formula: &Formula<String>,
    ) -> Result<Option<Certificate<TheoremId>>, CliError> {
        let formula = self.vocabulary.resolve(formula)?;
        Ok(disprove_formula(&self.index, &formula)?)
    }

    pub fn prove(
        &mut self,
        when: &Formula<String>,
        then: &Formula<String>,
    ) -> Result<Option<Certificate<TheoremId>>, CliError> {
        let when = self.vocabulary.resolve(when)?;
        let then = self.vocabulary.resolve(then)?;
        Ok(prove_theorem(&self.index, &when, &then)?)
    }

    /// Try to prove the converse of the theorem `id`.
    pub fn converse(&self, id: &str) -> Result<Option<Certificate<TheoremId>>, CliError> {
        let theorem = self.theorem(id)?;
        Ok(prove_converse(&self.index, theorem)?)
    }
}

// =============================================================================
// TESTS
// =============================================================================
