//! # Deduce CLI Module
//!
//! ## Available Commands
//!
//! - `deduce` - Derive every trait that follows from a set of traits
//! - `disprove` - Try to show a formula is unsatisfiable
//! - `prove` - Try to prove `when => then`
//! - `converse` - Try to prove the converse of a theorem
//! - `check` - Load a theorem file and report its size

mod commands;

use crate::config::Config;
use crate::error::CliError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Deduce - forward-chaining queries over theorem files
///
/// Theorems are implications between formulas over named boolean properties.
/// Formulas are JSON: {"atom":{"property":"P","value":true}}, {"and":[...]},
/// {"or":[...]}.
#[derive(Parser, Debug)]
#[command(name = "deduce")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Path to the config file [default: deduce.toml, if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the theorem file (overrides the config file)
    #[arg(short, long, global = true)]
    pub theorems: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive every trait that follows from the given ones
    Deduce {
        /// Given traits as a JSON object, e.g. '{"P": true, "S": false}'
        traits: String,
    },

    /// Try to show that a formula cannot hold
    Disprove {
        /// Formula as JSON
        formula: String,
    },

    /// Try to prove that `when` implies `then`
    Prove {
        /// Premise formula as JSON
        when: String,

        /// Conclusion formula as JSON
        then: String,
    },

    /// Try to prove the converse of a theorem in the theorem file
    Converse {
        /// Theorem id
        theorem: String,
    },

    /// Load the theorem file and report its size
    Check,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments and the loaded config.
pub fn execute(cli: Cli, config: &Config) -> Result<(), CliError> {
    let json_mode = cli.json_mode || config.output.json;
    let theorems = cli
        .theorems
        .or_else(|| config.theorems.clone())
        .ok_or_else(|| {
            CliError::Config(
                "no theorem file: pass --theorems or set `theorems` in deduce.toml".to_string(),
            )
        })?;

    match cli.command {
        Some(Commands::Deduce { traits }) => cmd_deduce(&theorems, json_mode, &traits),
        Some(Commands::Disprove { formula }) => cmd_disprove(&theorems, json_mode, &formula),
        Some(Commands::Prove { when, then }) => cmd_prove(&theorems, json_mode, &when, &then),
        Some(Commands::Converse { theorem }) => cmd_converse(&theorems, json_mode, &theorem),
        Some(Commands::Check) | None => cmd_check(&theorems, json_mode),
    }
}
