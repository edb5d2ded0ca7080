//! Error types for the searchkit crate.
//!
//! Only genuine contract violations surface here. A search that exhausts its
//! frontier without reaching a goal is *not* an error; the engines report it
//! as `None`.

use thiserror::Error;

/// Main error type for the searchkit crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("internal game-tree node has no children")]
    EmptyInternalNode,

    #[error("chance node reached by a deterministic evaluator (use expectimax)")]
    ChanceInDeterministicTree,

    #[error("child of a chance node carries no probability")]
    MissingChanceProbability,

    #[error("probability {value} is not a finite number in [0, 1]")]
    InvalidChanceProbability { value: f64 },

    #[error("chance node probabilities sum to {sum}, expected 1")]
    UnnormalizedDistribution { sum: f64 },

    #[error("probability attached to a child of a non-chance node")]
    UnexpectedProbability,

    #[error("payoff vector has {got} components, expected {expected}")]
    PayoffArity { expected: usize, got: usize },

    #[error("player {player} is out of range for a {num_players}-player game")]
    PlayerOutOfRange { player: usize, num_players: usize },
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
