//! Accumulated clue knowledge for one puzzle

use crate::core::Clue;
use log::trace;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;

/// Everything learned from the guesses accepted so far
///
/// State only ever becomes more restrictive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueState {
    known_positions: Vec<Option<char>>,
    misplaced: FxHashMap<char, BTreeSet<usize>>,
    excluded: FxHashSet<char>,
}

impl ClueState {
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            known_positions: vec![None; word_length],
            misplaced: FxHashMap::default(),
            excluded: FxHashSet::default(),
        }
    }

    /// Confirmed letter for each position
    #[must_use]
    pub fn known_positions(&self) -> &[Option<char>] {
        &self.known_positions
    }

    /// Confirmed letter at `position`
    ///
    /// # Panics
    /// Panics if `position` is not below the word length.
    #[inline]
    #[must_use]
    pub fn known_at(&self, position: usize) -> Option<char> {
        self.known_positions[position]
    }

    /// Letters known to be present, with the positions they are known not to occupy
    #[must_use]
    pub const fn misplaced(&self) -> &FxHashMap<char, BTreeSet<usize>> {
        &self.misplaced
    }

    #[inline]
    #[must_use]
    pub fn is_misplaced_at(&self, letter: char, position: usize) -> bool {
        self.misplaced
            .get(&letter)
            .is_some_and(|positions| positions.contains(&position))
    }

    /// Letters every candidate must contain somewhere
    pub fn required_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.misplaced.keys().copied()
    }

    #[must_use]
    pub const fn excluded(&self) -> &FxHashSet<char> {
        &self.excluded
    }

    #[inline]
    #[must_use]
    pub fn is_excluded(&self, letter: char) -> bool {
        self.excluded.contains(&letter)
    }

    /// Whether no clue has been recorded yet
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.known_positions.iter().all(Option::is_none)
            && self.misplaced.is_empty()
            && self.excluded.is_empty()
    }

    /// Letters that are excluded yet also known to be in the word
    ///
    /// Arises from repeated letters in a guess. Sorted for stable reporting.
    #[must_use]
    pub fn conflicts(&self) -> Vec<char> {
        let mut conflicts: Vec<char> = self
            .excluded
            .iter()
            .copied()
            .filter(|letter| {
                self.misplaced.contains_key(letter) || self.known_positions.contains(&Some(*letter))
            })
            .collect();
        conflicts.sort_unstable();
        conflicts
    }

    /// Fold one validated guess into the state, left to right
    ///
    /// An absent letter stays excluded even when another position of the same
    /// guess marks it correct or present.
    pub(crate) fn record(&mut self, word: &str, clues: &[Clue]) {
        for (position, (letter, &clue)) in word.chars().zip(clues).enumerate() {
            trace!("position {position}: {letter} -> {clue:?}");
            match clue {
                Clue::Correct => self.known_positions[position] = Some(letter),
                Clue::Present => {
                    self.misplaced.entry(letter).or_default().insert(position);
                }
                Clue::Absent => {
                    self.excluded.insert(letter);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_clues;

    fn recorded(length: usize, guesses: &[(&str, &str)]) -> ClueState {
        let mut state = ClueState::new(length);
        for (word, clues) in guesses {
            state.record(word, &parse_clues(clues).unwrap());
        }
        state
    }

    #[test]
    fn new_state_is_fresh() {
        let state = ClueState::new(5);
        assert!(state.is_fresh());
        assert_eq!(state.known_positions(), &[None; 5]);
    }

    #[test]
    fn record_sorts_clues_into_categories() {
        let state = recorded(6, &[("retina", "GBGGGY")]);

        assert_eq!(
            state.known_positions(),
            &[Some('r'), None, Some('t'), Some('i'), Some('n'), None]
        );
        assert!(state.is_excluded('e'));
        assert!(state.is_misplaced_at('a', 5));
        assert!(!state.is_misplaced_at('a', 1));
        assert_eq!(state.required_letters().collect::<Vec<_>>(), vec!['a']);
        assert!(!state.is_fresh());
    }

    #[test]
    fn misplaced_positions_accumulate() {
        let state = recorded(5, &[("crane", "BYBBB"), ("sport", "BBBYB")]);

        let positions: Vec<usize> = state.misplaced()[&'r'].iter().copied().collect();
        assert_eq!(positions, vec![1, 3]);
    }

    #[test]
    fn absent_after_correct_keeps_both_facts() {
        let state = recorded(5, &[("crane", "GBBBB"), ("crane", "BBBBB")]);

        // Known slot stays, but 'c' is now also excluded
        assert_eq!(state.known_at(0), Some('c'));
        assert!(state.is_excluded('c'));
        assert_eq!(state.conflicts(), vec!['c']);
    }

    #[test]
    fn absent_duplicate_is_never_lifted() {
        // GEESE against THOSE: E is absent twice, then correct at the end
        let state = recorded(5, &[("geese", "BBBGG")]);

        assert!(state.is_excluded('e'));
        assert_eq!(state.known_at(4), Some('e'));
        assert_eq!(state.conflicts(), vec!['e']);
    }

    #[test]
    fn no_conflicts_for_consistent_clues() {
        let state = recorded(5, &[("crane", "GYBBG")]);
        assert!(state.conflicts().is_empty());
    }
}
