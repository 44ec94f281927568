//! # Formula Module
//!
//! Boolean formulas over property identifiers.
//!
//! - `Atom { property, value }`: the property has the given value
//! - `And(subs)` / `Or(subs)`: conjunction / disjunction of sub-formulas
//!
//! Evaluation is three-valued (Kleene): `Some(true)`, `Some(false)`, or
//! `None` for unknown. Negation is a structural De Morgan rewrite, so a
//! formula never contains an explicit "not" node.

use crate::Traits;
use crate::seen::Seen;
use serde::{Deserialize, Serialize};

/// A formula over properties of type `P`.
///
/// Serialized externally tagged:
/// `{"atom": {"property": "P", "value": true}}`, `{"and": [...]}`, `{"or": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formula<P> {
    Atom { property: P, value: bool },
    And(Vec<Formula<P>>),
    Or(Vec<Formula<P>>),
}

impl<P> Formula<P> {
    /// Atom helper.
    #[must_use]
    pub fn atom(property: P, value: bool) -> Self {
        Self::Atom { property, value }
    }

    /// Conjunction helper.
    #[must_use]
    pub fn and(subs: Vec<Formula<P>>) -> Self {
        Self::And(subs)
    }

    /// Disjunction helper.
    #[must_use]
    pub fn or(subs: Vec<Formula<P>>) -> Self {
        Self::Or(subs)
    }

    /// Rebuild the formula with every property mapped through `f`.
    ///
    /// Shape and values are preserved; only the leaves change.
    pub fn map_properties<Q, F>(&self, mut f: F) -> Formula<Q>
    where
        F: FnMut(&P) -> Q,
    {
        self.map_with(&mut f)
    }

    /// Fallible variant of [`Formula::map_properties`]; stops at the first error.
    pub fn try_map_properties<Q, E, F>(&self, mut f: F) -> Result<Formula<Q>, E>
    where
        F: FnMut(&P) -> Result<Q, E>,
    {
        self.try_map_with(&mut f)
    }

    fn map_with<Q, F>(&self, f: &mut F) -> Formula<Q>
    where
        F: FnMut(&P) -> Q,
    {
        match self {
            Self::Atom { property, value } => Formula::Atom {
                property: f(property),
                value: *value,
            },
            Self::And(subs) => Formula::And(subs.iter().map(|sub| sub.map_with(f)).collect()),
            Self::Or(subs) => Formula::Or(subs.iter().map(|sub| sub.map_with(f)).collect()),
        }
    }

    fn try_map_with<Q, E, F>(&self, f: &mut F) -> Result<Formula<Q>, E>
    where
        F: FnMut(&P) -> Result<Q, E>,
    {
        Ok(match self {
            Self::Atom { property, value } => Formula::Atom {
                property: f(property)?,
                value: *value,
            },
            Self::And(subs) => Formula::And(
                subs.iter()
                    .map(|sub| sub.try_map_with(f))
                    .collect::<Result<_, _>>()?,
            ),
            Self::Or(subs) => Formula::Or(
                subs.iter()
                    .map(|sub| sub.try_map_with(f))
                    .collect::<Result<_, _>>()?,
            ),
        })
    }
}

impl<P: Clone> Formula<P> {
    /// The De Morgan dual: `~Atom(p, v) = Atom(p, !v)`, `~And = Or(~subs)`, `~Or = And(~subs)`.
    #[must_use]
    pub fn negate(&self) -> Self {
        match self {
            Self::Atom { property, value } => Self::Atom {
                property: property.clone(),
                value: !value,
            },
            Self::And(subs) => Self::Or(subs.iter().map(Self::negate).collect()),
            Self::Or(subs) => Self::And(subs.iter().map(Self::negate).collect()),
        }
    }
}

impl<P: Ord + Clone> Formula<P> {
    /// Evaluate against known traits.
    ///
    /// `false` dominates `unknown` in a conjunction and `true` dominates
    /// `unknown` in a disjunction, so both short-circuit.
    #[must_use]
    pub fn evaluate(&self, traits: &Traits<P>) -> Option<bool> {
        match self {
            Self::Atom { property, value } => traits.get(property).map(|known| known == value),
            Self::And(subs) => {
                let mut result = Some(true);
                for sub in subs {
                    match sub.evaluate(traits) {
                        Some(false) => return Some(false),
                        None => result = None,
                        Some(true) => {}
                    }
                }
                result
            }
            Self::Or(subs) => {
                let mut result = Some(false);
                for sub in subs {
                    match sub.evaluate(traits) {
                        Some(true) => return Some(true),
                        None => result = None,
                        Some(false) => {}
                    }
                }
                result
            }
        }
    }

    /// Every property the formula mentions, first occurrence order, no duplicates.
    #[must_use]
    pub fn properties(&self) -> Vec<P> {
        let mut seen = Seen::new();
        let mut out = Vec::new();
        self.collect_properties(&mut seen, &mut out);
        out
    }

    fn collect_properties<'f>(&'f self, seen: &mut Seen<&'f P>, out: &mut Vec<P>) {
        match self {
            Self::Atom { property, .. } => {
                if seen.visit(property) {
                    out.push(property.clone());
                }
            }
            Self::And(subs) | Self::Or(subs) => {
                for sub in subs {
                    sub.collect_properties(seen, out);
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
