//! # Primitives
//!
//! Fixed names used by the engine and its front ends.

/// Rendering of a contradiction that needed no theorem at all.
///
/// The seed assertion alone was self-contradictory, e.g. `P` and `~P`.
pub const TAUTOLOGY: &str = "tautology";

/// Rendering of the synthetic theorem attributed to forced assertions.
pub const GIVEN: &str = "given";

/// Targets used with `tracing` events, to narrow output to one part of the engine.
pub mod targets {
    /// Forcing and implication application.
    pub const PROVER: &str = "deduce::prover";

    /// Work-list marking.
    pub const QUEUE: &str = "deduce::queue";

    /// The top-level queries.
    pub const QUERIES: &str = "deduce::queries";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_share_the_crate_prefix() {
        for target in [targets::PROVER, targets::QUEUE, targets::QUERIES] {
            assert!(target.starts_with("deduce::"));
        }
    }
}
