//! # Deduce
//!
//! Command-line front end for `deduce-core`: theorem files, configuration
//! and the query commands. The binary in `main.rs` only wires logging and
//! calls [`cli::execute`].

pub mod cli;
pub mod config;
pub mod error;
pub mod knowledge;

pub use error::CliError;
pub use knowledge::Knowledge;
