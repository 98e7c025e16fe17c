//! One-shot filtering from a list of `guess:clues` pairs

use crate::core::GuessError;
use crate::engine::ConstraintEngine;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("expected GUESS:CLUES, got {0:?}")]
    MissingSeparator(String),

    #[error("guess {index} ({pair:?}): {source}")]
    Guess {
        index: usize,
        pair: String,
        #[source]
        source: GuessError,
    },
}

/// Split `"crane:GYBBG"` (or `"crane=GYBBG"`) into guess and clue text
///
/// # Errors
///
/// Returns `FilterError::MissingSeparator` when neither `:` nor `=` is present.
pub fn parse_guess_pair(pair: &str) -> Result<(&str, &str), FilterError> {
    pair.split_once([':', '='])
        .map(|(guess, clues)| (guess.trim(), clues))
        .ok_or_else(|| FilterError::MissingSeparator(pair.to_string()))
}

/// Apply every pair in order and return the surviving candidates
///
/// Stops at the first malformed pair; earlier pairs stay applied.
///
/// # Errors
///
/// Returns the first `FilterError` encountered, with its 1-based index.
pub fn filter_candidates<S: AsRef<str>>(
    engine: &mut ConstraintEngine,
    pairs: &[S],
) -> Result<Vec<String>, FilterError> {
    for (i, pair) in pairs.iter().enumerate() {
        let pair = pair.as_ref();
        let (guess, clues) = parse_guess_pair(pair)?;

        engine
            .guess(guess, clues)
            .map_err(|source| FilterError::Guess {
                index: i + 1,
                pair: pair.to_string(),
                source,
            })?;
    }

    Ok(engine.candidates())
}
