//! Clue-driven candidate elimination
//!
//! [`ConstraintEngine`] owns the dictionary trie for one word length and the
//! [`ClueState`] learned so far. Each accepted guess tightens the state and
//! prunes the trie with the four [`Rule`]s.

mod constraint;
mod error;
mod rules;
mod state;

pub use constraint::ConstraintEngine;
pub use error::EngineError;
pub use rules::{BoundRule, Rule};
pub use state::ClueState;
