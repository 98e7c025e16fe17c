//! Per-puzzle constraint engine

use super::{ClueState, EngineError, Rule};
use crate::core::{Clue, GuessError, clues_from_symbols, split_symbols};
use crate::trie::Trie;
use crate::wordlists::{DictionarySource, is_dictionary_word};
use log::{debug, info, warn};

/// Candidate tracker for a single puzzle
///
/// Starts with every dictionary word of the chosen length and narrows the set
/// with each accepted guess. A rejected guess leaves everything untouched.
#[derive(Debug, Clone)]
pub struct ConstraintEngine {
    word_length: usize,
    state: ClueState,
    trie: Trie,
    guesses_made: usize,
}

impl ConstraintEngine {
    /// Build an engine for `word_length`-letter words from a dictionary source
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ZeroLength` for a zero word length, or
    /// `EngineError::Dictionary` if the source cannot produce its words.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::engine::ConstraintEngine;
    ///
    /// let engine = ConstraintEngine::new(6, &["rating", "retina", "tigers"]).unwrap();
    /// assert_eq!(engine.candidate_count(), 3);
    /// ```
    pub fn new<D>(word_length: usize, source: &D) -> Result<Self, EngineError>
    where
        D: DictionarySource + ?Sized,
    {
        if word_length == 0 {
            return Err(EngineError::ZeroLength);
        }

        let words = source.words_of_length(word_length)?;
        Ok(Self::build(word_length, words))
    }

    /// Build an engine directly from in-memory words
    ///
    /// Words that are not exactly `word_length` lowercase letters are skipped.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ZeroLength` for a zero word length.
    pub fn from_words<I, S>(word_length: usize, words: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if word_length == 0 {
            return Err(EngineError::ZeroLength);
        }

        Ok(Self::build(word_length, words))
    }

    fn build<I, S>(word_length: usize, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let trie = Self::load_trie(word_length, words);
        info!(
            "loaded {} words of length {word_length} ({} trie nodes)",
            trie.len(),
            trie.node_count()
        );

        Self {
            word_length,
            state: ClueState::new(word_length),
            trie,
            guesses_made: 0,
        }
    }

    fn load_trie<I, S>(word_length: usize, words: I) -> Trie
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        trie.insert_many(
            words
                .into_iter()
                .filter(|word| is_dictionary_word(word.as_ref(), word_length)),
        );
        trie
    }

    /// Start the puzzle over with fresh clue state and a reloaded dictionary
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Dictionary` if the source fails; the engine is
    /// left unchanged in that case.
    pub fn reset<D>(&mut self, source: &D) -> Result<(), EngineError>
    where
        D: DictionarySource + ?Sized,
    {
        let words = source.words_of_length(self.word_length)?;
        self.trie = Self::load_trie(self.word_length, words);
        self.state = ClueState::new(self.word_length);
        self.guesses_made = 0;
        info!("reset: {} candidates", self.trie.len());
        Ok(())
    }

    fn check_guess_format(&self, guess: &str) -> Result<(), GuessError> {
        if is_dictionary_word(guess, self.word_length) {
            Ok(())
        } else {
            Err(GuessError::InvalidGuessFormat {
                guess: guess.to_string(),
                expected: self.word_length,
            })
        }
    }

    fn check_clue_count(&self, actual: usize) -> Result<(), GuessError> {
        if actual == self.word_length {
            Ok(())
        } else {
            Err(GuessError::ClueLengthMismatch {
                expected: self.word_length,
                actual,
            })
        }
    }

    /// Validate a guess and its raw clue text without applying it
    ///
    /// Checks run in order and stop at the first failure: guess format, clue
    /// sequence shape, clue count, clue symbols.
    ///
    /// # Errors
    ///
    /// Returns the first `GuessError` encountered.
    pub fn validate_guess(&self, guess: &str, clues: &str) -> Result<Vec<Clue>, GuessError> {
        self.check_guess_format(guess)?;
        let symbols = split_symbols(clues)?;
        self.check_clue_count(symbols.len())?;
        clues_from_symbols(&symbols)
    }

    /// Apply a guess with raw clue text such as `"GBYBG"`
    ///
    /// # Errors
    ///
    /// Returns a `GuessError` if validation fails. No state changes in that case.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::engine::ConstraintEngine;
    ///
    /// let mut engine = ConstraintEngine::new(6, &["rating", "retina", "tigers"]).unwrap();
    /// engine.guess("retina", "GBGGGY").unwrap();
    /// assert_eq!(engine.candidates(), vec!["rating".to_string()]);
    /// ```
    pub fn guess(&mut self, word: &str, clues: &str) -> Result<(), GuessError> {
        let clues = self.validate_guess(word, clues)?;
        self.commit(word, &clues);
        Ok(())
    }

    /// Apply a guess with already-typed clues
    ///
    /// # Errors
    ///
    /// Returns `InvalidGuessFormat` or `ClueLengthMismatch`. No state changes
    /// in that case.
    pub fn apply(&mut self, word: &str, clues: &[Clue]) -> Result<(), GuessError> {
        self.check_guess_format(word)?;
        self.check_clue_count(clues.len())?;
        self.commit(word, clues);
        Ok(())
    }

    fn commit(&mut self, word: &str, clues: &[Clue]) {
        let before = self.trie.len();
        self.state.record(word, clues);
        self.guesses_made += 1;

        let conflicts = self.state.conflicts();
        if !conflicts.is_empty() {
            warn!(
                "letters {conflicts:?} are both excluded and known present; \
                 words containing them are eliminated"
            );
        }

        let rules = Rule::ORDERED.map(|rule| rule.bind(&self.state));
        let stats = self.trie.prune(&rules);

        debug!(
            "guess #{} {word}: {before} -> {} candidates ({} nodes visited, {} subtrees cut, {} nodes freed)",
            self.guesses_made,
            self.trie.len(),
            stats.visited,
            stats.removed_subtrees,
            stats.freed_nodes
        );
    }

    /// Words still consistent with every clue, in lexicographic order
    #[must_use]
    pub fn candidates(&self) -> Vec<String> {
        self.trie.enumerate()
    }

    /// Lexicographically first remaining candidate
    #[must_use]
    pub fn first_candidate(&self) -> Option<String> {
        self.trie.first()
    }

    #[must_use]
    pub fn is_candidate(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    #[inline]
    #[must_use]
    pub const fn candidate_count(&self) -> usize {
        self.trie.len()
    }

    /// Exactly one candidate remains
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.trie.len() == 1
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn guesses_made(&self) -> usize {
        self.guesses_made
    }

    #[must_use]
    pub const fn state(&self) -> &ClueState {
        &self.state
    }

    #[must_use]
    pub const fn trie(&self) -> &Trie {
        &self.trie
    }
}
