//! Caller-input errors for guesses and clues

use thiserror::Error;

/// Rejection reasons for a guess/clue pair
///
/// Checks run in declaration order and the first failure is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// Guess is not exactly `expected` lowercase ASCII letters
    #[error("guess must be exactly {expected} lowercase letters, got {guess:?}")]
    InvalidGuessFormat { guess: String, expected: usize },

    /// Clue input is not a flat sequence of single symbols
    #[error("clues must be a sequence of single clue symbols")]
    InvalidClueType,

    /// Number of clues differs from the word length
    #[error("expected {expected} clues, got {actual}")]
    ClueLengthMismatch { expected: usize, actual: usize },

    /// A symbol that is not one of G, Y or B
    #[error("unrecognized clue symbol {symbol:?} at position {position}")]
    InvalidClueSymbol { symbol: char, position: usize },
}
