//! The four elimination rules applied after every guess
//!
//! Rules are a closed set of checks against the [`ClueState`], dispatched by
//! [`Rule::eliminates`]. Binding a rule to a state yields a [`Predicate`] the
//! trie can prune with.

use super::ClueState;
use crate::trie::{NodeRef, Predicate};

/// A single elimination check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// A confirmed letter exists for this position and differs
    MatchesSolution,
    /// The letter is known to be absent from the solution
    ExcludedLetter,
    /// The letter is present but known not to sit at this position
    WrongSpot,
    /// A complete word lacks some letter known to be present
    MissingRequired,
}

impl Rule {
    /// Order in which rules are tried on each node
    pub const ORDERED: [Self; 4] = [
        Self::MatchesSolution,
        Self::ExcludedLetter,
        Self::WrongSpot,
        Self::MissingRequired,
    ];

    /// Whether this rule removes the subtree at `node`
    ///
    /// `MissingRequired` only fires on terminal nodes so it never cuts a
    /// prefix whose longer words could still qualify.
    #[must_use]
    pub fn eliminates(self, state: &ClueState, node: &NodeRef<'_>, depth: usize) -> bool {
        let Some(letter) = node.character() else {
            return false;
        };

        match self {
            Self::MatchesSolution => state.known_at(depth).is_some_and(|known| known != letter),
            Self::ExcludedLetter => state.is_excluded(letter),
            Self::WrongSpot => state.is_misplaced_at(letter, depth),
            Self::MissingRequired => {
                if !node.is_terminal() {
                    return false;
                }
                let word = node.word();
                state
                    .required_letters()
                    .any(|required| !word.contains(required))
            }
        }
    }

    #[must_use]
    pub const fn bind(self, state: &ClueState) -> BoundRule<'_> {
        BoundRule { rule: self, state }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MatchesSolution => "matches-solution",
            Self::ExcludedLetter => "excluded-letter",
            Self::WrongSpot => "wrong-spot",
            Self::MissingRequired => "missing-required",
        }
    }
}

/// A rule evaluated against a particular clue state
#[derive(Debug, Clone, Copy)]
pub struct BoundRule<'s> {
    rule: Rule,
    state: &'s ClueState,
}

impl BoundRule<'_> {
    #[must_use]
    pub const fn rule(&self) -> Rule {
        self.rule
    }
}

impl Predicate for BoundRule<'_> {
    #[inline]
    fn eliminates(&self, node: &NodeRef<'_>, depth: usize) -> bool {
        self.rule.eliminates(self.state, node, depth)
    }
}
