//! Error types for card construction and hand evaluation.

use thiserror::Error;

/// Errors that can occur when constructing or parsing card values.
///
/// Domain violations fail fast at construction time and are never coerced
/// into a nearby legal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank value or symbol outside the permitted domain.
    #[error("rank outside the permitted domain")]
    InvalidRank,
    /// Suit symbol outside the permitted domain.
    #[error("suit outside the permitted domain")]
    InvalidSuit,
    /// Card notation is not a rank symbol followed by a suit symbol.
    #[error("card notation must be a rank followed by a suit")]
    InvalidNotation,
}

/// Errors that can occur during hand evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Fewer cards were supplied than the evaluation requires.
    #[error("fewer cards than the evaluation requires")]
    InsufficientCards,
}
