//! Core domain types for Wordle feedback
//!
//! Clue symbols, their parsing, and the caller-input error taxonomy.
//! Nothing here knows about the trie or the elimination engine.

mod clue;
mod error;

pub use clue::{Clue, clues_from_symbols, clues_to_symbols, parse_clues, score, split_symbols};
pub use error::GuessError;
