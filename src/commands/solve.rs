//! Word solving command
//!
//! Plays the engine against a known answer, always guessing the first
//! remaining candidate, and records how the candidate set shrinks.

use crate::core::{Clue, GuessError, score};
use crate::engine::{ConstraintEngine, EngineError};
use crate::wordlists::is_dictionary_word;
use thiserror::Error;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// How a solve attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveOutcome {
    /// The target was guessed
    Solved,
    /// Guess limit reached with candidates left
    OutOfGuesses,
    /// Clues eliminated every candidate, the target included
    Exhausted,
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub outcome: SolveOutcome,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub clues: Vec<Clue>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid target {target:?}: expected {length} lowercase letters")]
    InvalidTarget { target: String, length: usize },

    #[error("target {0:?} is not a remaining candidate")]
    NotACandidate(String),

    #[error(transparent)]
    Guess(#[from] GuessError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Solve `config.target` by repeatedly guessing the engine's first candidate
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a well-formed word of the engine's length
/// - The target is not among the engine's current candidates
pub fn solve_word(
    config: SolveConfig,
    mut engine: ConstraintEngine,
) -> Result<SolveResult, SolveError> {
    let target = config.target;

    if !is_dictionary_word(&target, engine.word_length()) {
        return Err(SolveError::InvalidTarget {
            target,
            length: engine.word_length(),
        });
    }
    if !engine.is_candidate(&target) {
        return Err(SolveError::NotACandidate(target));
    }

    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = engine.candidate_count();

        let Some(guess) = engine.first_candidate() else {
            break;
        };

        let clues = score(&guess, &target);
        engine.apply(&guess, &clues)?;
        let solved = guess == target;

        guesses.push(GuessStep {
            word: guess,
            clues,
            candidates_before,
            candidates_after: engine.candidate_count(),
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                outcome: SolveOutcome::Solved,
                guesses,
                target,
            });
        }
    }

    let outcome = if engine.candidate_count() == 0 {
        SolveOutcome::Exhausted
    } else {
        SolveOutcome::OutOfGuesses
    };

    Ok(SolveResult {
        success: false,
        outcome,
        guesses,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(words: &[&str]) -> ConstraintEngine {
        ConstraintEngine::from_words(5, words).unwrap()
    }

    const WORDS: [&str; 6] = ["crane", "crate", "grate", "irate", "slate", "trace"];

    #[test]
    fn solve_word_succeeds() {
        let result = solve_word(SolveConfig::new("grate".to_string()), engine(&WORDS)).unwrap();

        assert!(result.success);
        assert_eq!(result.outcome, SolveOutcome::Solved);
        assert_eq!(result.guesses.last().unwrap().word, "grate");
    }

    #[test]
    fn solve_guesses_first_candidate_each_turn() {
        let result = solve_word(SolveConfig::new("grate".to_string()), engine(&WORDS)).unwrap();

        let words: Vec<&str> = result.guesses.iter().map(|s| s.word.as_str()).collect();
        // CRANE scores BGGBG, leaving only GRATE and IRATE
        assert_eq!(words, vec!["crane", "grate"]);
    }

    #[test]
    fn solve_records_history() {
        let result = solve_word(SolveConfig::new("irate".to_string()), engine(&WORDS)).unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert_eq!(step.clues.len(), 5);
        }
        assert_eq!(result.guesses.last().unwrap().candidates_after, 1);
    }

    #[test]
    fn solve_perfect_first_guess() {
        let result = solve_word(SolveConfig::new("crane".to_string()), engine(&WORDS)).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.guesses[0].candidates_after, 1);
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let mut config = SolveConfig::new("trace".to_string());
        config.max_guesses = 1;

        let result = solve_word(config, engine(&WORDS)).unwrap();

        assert!(!result.success);
        assert_eq!(result.outcome, SolveOutcome::OutOfGuesses);
        assert_eq!(result.guesses.len(), 1);
    }

    #[test]
    fn solve_reports_exhaustion_from_duplicate_letters() {
        // GEESE scores BBBGG against THOSE, which excludes E outright
        let result = solve_word(
            SolveConfig::new("those".to_string()),
            engine(&["geese", "those"]),
        )
        .unwrap();

        assert!(!result.success);
        assert_eq!(result.outcome, SolveOutcome::Exhausted);
        assert_eq!(result.guesses.len(), 1);
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let result = solve_word(SolveConfig::new("Grate".to_string()), engine(&WORDS));
        assert!(matches!(result, Err(SolveError::InvalidTarget { .. })));

        let result = solve_word(SolveConfig::new("zzzzz".to_string()), engine(&WORDS));
        assert!(matches!(result, Err(SolveError::NotACandidate(_))));
    }
}
