//! Wordle Trie
//!
//! Tracks which dictionary words are still consistent with Wordle clues. The
//! dictionary lives in a prefix tree; every accepted guess prunes whole
//! subtrees that violate the accumulated clues instead of re-checking each
//! surviving word.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_trie::engine::ConstraintEngine;
//!
//! let mut engine = ConstraintEngine::new(6, &["rating", "retina", "tigers"]).unwrap();
//!
//! // G = correct spot, Y = wrong spot, B = not in word
//! engine.guess("retina", "GBGGGY").unwrap();
//! assert_eq!(engine.candidates(), vec!["rating".to_string()]);
//! ```

// Core domain types
pub mod core;

// Prefix tree
pub mod trie;

// Clue-driven elimination
pub mod engine;

// Dictionary sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
