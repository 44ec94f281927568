//! # CLI Command Implementations
//!
//! Each command has a pure half that returns a report (used by the tests)
//! and a `cmd_*` half that loads the theorem file and prints the report.

use crate::error::CliError;
use crate::knowledge::{Knowledge, TheoremId};
use deduce_core::{Certificate, Deduction, Formula};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// =============================================================================
// FILE LOADING
// =============================================================================

/// Maximum theorem file size (64 MB).
const MAX_THEOREM_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), CliError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| CliError::Io(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(CliError::Io(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Resolve `path` and make sure it names a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, CliError> {
    let canonical = path
        .canonicalize()
        .map_err(|e| CliError::Io(format!("Invalid file path '{}': {}", path.display(), e)))?;

    if !canonical.is_file() {
        return Err(CliError::Io(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Read and index a theorem file.
pub fn load_knowledge(path: &Path) -> Result<Knowledge, CliError> {
    let validated_path = validate_file_path(path)?;
    validate_file_size(&validated_path, MAX_THEOREM_FILE_SIZE)?;

    let contents = std::fs::read(&validated_path)
        .map_err(|e| CliError::Io(format!("Read file: {}", e)))?;
    let knowledge = Knowledge::from_json(&contents)?;

    tracing::info!(
        path = %validated_path.display(),
        theorems = knowledge.index().len(),
        properties = knowledge.vocabulary().len(),
        "theorems loaded"
    );
    Ok(knowledge)
}

fn parse_json<V: DeserializeOwned>(what: &str, text: &str) -> Result<V, CliError> {
    serde_json::from_str(text).map_err(|e| CliError::Parse(format!("Invalid {}: {}", what, e)))
}

fn print_json<V: Serialize>(value: &V) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

// =============================================================================
// REPORTS
// =============================================================================

/// Size of a loaded theorem set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub theorems: usize,
    pub properties: usize,
}

/// Outcome of a forcing query (`disprove`, `prove`, `converse`).
///
/// `proof` is `None` when nothing was found, which is not a disproof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProofReport {
    pub query: String,
    pub proved: bool,
    pub proof: Option<Certificate<TheoremId>>,
}

impl ProofReport {
    fn new(query: String, proof: Option<Certificate<TheoremId>>) -> Self {
        Self {
            query,
            proved: proof.is_some(),
            proof,
        }
    }

    fn print(&self, json_mode: bool) {
        if json_mode {
            print_json(self);
            return;
        }

        println!("{}", self.query);
        match &self.proof {
            Some(Certificate::Tautology) => println!("  proved: tautology"),
            Some(certificate) => println!("  proved by theorems: {}", certificate),
            None => println!("  no result"),
        }
    }
}

// =============================================================================
// QUERIES
// =============================================================================

#[must_use]
pub fn check(knowledge: &Knowledge) -> CheckReport {
    CheckReport {
        theorems: knowledge.index().len(),
        properties: knowledge.vocabulary().len(),
    }
}

/// `traits` is a JSON object of property name -> value.
pub fn deduce(
    knowledge: &mut Knowledge,
    traits: &str,
) -> Result<Deduction<TheoremId, String>, CliError> {
    let given: BTreeMap<String, bool> = parse_json("traits", traits)?;
    knowledge.deduce(&given)
}

pub fn disprove(knowledge: &mut Knowledge, formula: &str) -> Result<ProofReport, CliError> {
    let parsed: Formula<String> = parse_json("formula", formula)?;
    let proof = knowledge.disprove(&parsed)?;
    Ok(ProofReport::new("disprove".to_string(), proof))
}

pub fn prove(knowledge: &mut Knowledge, when: &str, then: &str) -> Result<ProofReport, CliError> {
    let when: Formula<String> = parse_json("premise", when)?;
    let then: Formula<String> = parse_json("conclusion", then)?;
    let proof = knowledge.prove(&when, &then)?;
    Ok(ProofReport::new("prove".to_string(), proof))
}

pub fn converse(knowledge: &Knowledge, theorem: &str) -> Result<ProofReport, CliError> {
    let proof = knowledge.converse(theorem)?;
    Ok(ProofReport::new(format!("converse of {}", theorem), proof))
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Report theorem and property counts.
pub fn cmd_check(path: &Path, json_mode: bool) -> Result<(), CliError> {
    let knowledge = load_knowledge(path)?;
    let report = check(&knowledge);

    if json_mode {
        print_json(&report);
        return Ok(());
    }

    println!("Theorem File");
    println!("============");
    println!("Path:       {}", path.display());
    println!("Theorems:   {}", report.theorems);
    println!("Properties: {}", report.properties);
    Ok(())
}

/// Derive every trait that follows from `traits`.
pub fn cmd_deduce(path: &Path, json_mode: bool, traits: &str) -> Result<(), CliError> {
    let mut knowledge = load_knowledge(path)?;
    let deduction = deduce(&mut knowledge, traits)?;

    if json_mode {
        print_json(&deduction);
        return Ok(());
    }

    match deduction {
        Deduction::Contradiction(contradiction) => {
            println!("Contradiction");
            println!("  theorems:   {}", contradiction.theorems.join(", "));
            println!("  properties: {}", contradiction.properties.join(", "));
        }
        Deduction::Derivations(derivations) => {
            println!("Derived {} properties", derivations.len());
            for derivation in derivations {
                println!(
                    "  {} = {}  (theorems: {}; given: {})",
                    derivation.property,
                    derivation.value,
                    derivation.proof.theorems.join(", "),
                    derivation.proof.properties.join(", ")
                );
            }
        }
    }
    Ok(())
}

/// Try to show that `formula` cannot hold.
pub fn cmd_disprove(path: &Path, json_mode: bool, formula: &str) -> Result<(), CliError> {
    let mut knowledge = load_knowledge(path)?;
    disprove(&mut knowledge, formula)?.print(json_mode);
    Ok(())
}

/// Try to prove `when => then`.
pub fn cmd_prove(path: &Path, json_mode: bool, when: &str, then: &str) -> Result<(), CliError> {
    let mut knowledge = load_knowledge(path)?;
    prove(&mut knowledge, when, then)?.print(json_mode);
    Ok(())
}

/// Try to prove the converse of `theorem`, printing the converse itself too.
pub fn cmd_converse(path: &Path, json_mode: bool, theorem: &str) -> Result<(), CliError> {
    let knowledge = load_knowledge(path)?;
    let report = converse(&knowledge, theorem)?;

    if !json_mode {
        let implication = knowledge.theorem(theorem)?.converse();
        let vocabulary = knowledge.vocabulary();
        println!(
            "{} => {}",
            serde_json::to_string(&vocabulary.render(&implication.when)).unwrap_or_default(),
            serde_json::to_string(&vocabulary.render(&implication.then)).unwrap_or_default()
        );
    }
    report.print(json_mode);
    Ok(())
}
