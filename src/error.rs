//! Error types for quiz operations.

use thiserror::Error;

/// Errors that can occur when loading a country pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    /// The pool cannot fill a round.
    #[error("pool has {found} countries, at least 3 are required")]
    TooFewCountries {
        /// Number of countries supplied.
        found: usize,
    },
    /// The same country appears more than once.
    #[error("pool contains a duplicate country")]
    DuplicateCountry,
}

/// Errors that can occur when submitting a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// Guess index is outside the displayed options.
    #[error("guess index {0} is out of range")]
    InvalidIndex(usize),
    /// No round is awaiting a guess.
    #[error("no round is awaiting a guess")]
    InvalidState,
}

/// Errors that can occur when advancing to the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdvanceError {
    /// The game has ended and must be reset first.
    #[error("game is over")]
    GameOver,
    /// The current round has not been answered yet, or no game was started.
    #[error("invalid game state for advancing")]
    InvalidState,
}

/// Errors that can occur when replacing the active round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// No round is awaiting a guess.
    #[error("no round is awaiting a guess")]
    InvalidState,
    /// Correct index is outside the displayed options.
    #[error("correct index {0} is out of range")]
    InvalidIndex(usize),
    /// Options repeat a country.
    #[error("round options must be distinct")]
    DuplicateOption,
    /// An option is not part of the working pool.
    #[error("round option is not in the working pool")]
    UnknownCountry,
}
