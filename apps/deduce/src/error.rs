//! # CLI Errors
//!
//! Everything that can stop a command before or around the engine.

use deduce_core::DeduceError;
use thiserror::Error;

/// Errors reported by the `deduce` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// The engine rejected its input or broke an invariant.
    #[error("Engine error: {0}")]
    Engine(#[from] DeduceError),

    /// A file could not be read or failed validation.
    #[error("I/O error: {0}")]
    Io(String),

    /// A theorem file, formula or trait map is malformed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The configuration file is malformed or incomplete.
    #[error("Config error: {0}")]
    Config(String),

    /// No theorem with this id exists in the loaded theorem file.
    #[error("Unknown theorem: {0}")]
    UnknownTheorem(String),
}
