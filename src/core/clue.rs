//! Clue symbols and Wordle feedback
//!
//! A clue is the feedback for a single letter of a guess:
//! - `Correct` = green (letter in the right position)
//! - `Present` = yellow (letter in the word, wrong position)
//! - `Absent` = gray (letter not in the word)
//!
//! Raw clue text uses the symbols `G`, `Y` and `B`. Lowercase, `-`/`_` for gray
//! and the emoji squares are accepted as well.

use super::GuessError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for one letter position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clue {
    /// Right letter, right position
    Correct,
    /// Letter is in the solution somewhere else
    Present,
    /// Letter is not in the solution
    Absent,
}

impl Clue {
    /// Parse a single clue symbol
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::Clue;
    ///
    /// assert_eq!(Clue::from_symbol('G'), Some(Clue::Correct));
    /// assert_eq!(Clue::from_symbol('🟨'), Some(Clue::Present));
    /// assert_eq!(Clue::from_symbol('-'), Some(Clue::Absent));
    /// assert_eq!(Clue::from_symbol('x'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'B' | 'b' | '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Canonical text symbol
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'B',
        }
    }

    /// Colored square for terminal output
    #[inline]
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Split raw clue text into one symbol per position
///
/// Accepts compact text (`"GYBBG"`) or symbols separated by commas or
/// whitespace (`"G, Y, B, B, G"`). Symbols are not checked here.
///
/// # Errors
///
/// Returns `GuessError::InvalidClueType` if the text holds no symbols at all,
/// or if a separated token is longer than one symbol.
pub fn split_symbols(text: &str) -> Result<Vec<char>, GuessError> {
    let trimmed = text.trim();

    let symbols: Vec<char> = if trimmed.contains(is_separator) {
        let mut symbols = Vec::new();
        for token in trimmed.split(is_separator).filter(|t| !t.is_empty()) {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(symbol), None) => symbols.push(symbol),
                _ => return Err(GuessError::InvalidClueType),
            }
        }
        symbols
    } else {
        trimmed.chars().collect()
    };

    if symbols.is_empty() {
        return Err(GuessError::InvalidClueType);
    }

    Ok(symbols)
}

/// Convert symbols to clues, reporting the first unrecognized one
///
/// # Errors
///
/// Returns `GuessError::InvalidClueSymbol` for the first symbol that is not a clue.
pub fn clues_from_symbols(symbols: &[char]) -> Result<Vec<Clue>, GuessError> {
    symbols
        .iter()
        .enumerate()
        .map(|(position, &symbol)| {
            Clue::from_symbol(symbol).ok_or(GuessError::InvalidClueSymbol { symbol, position })
        })
        .collect()
}

/// Parse raw clue text of any length
///
/// # Errors
///
/// Returns `InvalidClueType` or `InvalidClueSymbol` as described on
/// [`split_symbols`] and [`clues_from_symbols`].
///
/// # Examples
/// ```
/// use wordle_trie::core::{Clue, parse_clues};
///
/// let compact = parse_clues("GYB").unwrap();
/// let spaced = parse_clues("g, y, -").unwrap();
/// assert_eq!(compact, spaced);
/// assert_eq!(compact, vec![Clue::Correct, Clue::Present, Clue::Absent]);
/// ```
pub fn parse_clues(text: &str) -> Result<Vec<Clue>, GuessError> {
    clues_from_symbols(&split_symbols(text)?)
}

/// Feedback for `guess` when `answer` is the solution
///
/// Implements Wordle's duplicate-letter rules: greens are assigned first and
/// consume their letter, yellows are then handed out from what remains.
///
/// Both words must have the same length.
#[must_use]
pub fn score(guess: &str, answer: &str) -> Vec<Clue> {
    let guess: Vec<char> = guess.chars().collect();
    let answer: Vec<char> = answer.chars().collect();
    debug_assert_eq!(guess.len(), answer.len(), "score requires equal lengths");

    let mut result = vec![Clue::Absent; guess.len()];
    let mut available: FxHashMap<char, usize> = FxHashMap::default();
    for &letter in &answer {
        *available.entry(letter).or_insert(0) += 1;
    }

    // First pass: greens
    for (i, (&g, &a)) in guess.iter().zip(&answer).enumerate() {
        if g == a {
            result[i] = Clue::Correct;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: yellows from the remaining pool
    for (i, &g) in guess.iter().enumerate() {
        if result[i] == Clue::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            result[i] = Clue::Present;
            *count -= 1;
        }
    }

    result
}

/// Render clues as their canonical symbols, e.g. `"GYBBG"`
#[must_use]
pub fn clues_to_symbols(clues: &[Clue]) -> String {
    clues.iter().map(|c| c.symbol()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Clue::{Absent, Correct, Present};

    #[test]
    fn symbols_round_trip_through_canonical_form() {
        for clue in [Correct, Present, Absent] {
            assert_eq!(Clue::from_symbol(clue.symbol()), Some(clue));
            assert_eq!(Clue::from_symbol(clue.emoji()), Some(clue));
        }
    }

    #[test]
    fn split_compact_and_separated() {
        assert_eq!(split_symbols("GYB").unwrap(), vec!['G', 'Y', 'B']);
        assert_eq!(split_symbols(" G Y B ").unwrap(), vec!['G', 'Y', 'B']);
        assert_eq!(split_symbols("G,Y,,B").unwrap(), vec!['G', 'Y', 'B']);
        assert_eq!(split_symbols("🟩🟨⬜").unwrap(), vec!['🟩', '🟨', '⬜']);
    }

    #[test]
    fn split_rejects_non_sequences() {
        assert_eq!(split_symbols(""), Err(GuessError::InvalidClueType));
        assert_eq!(split_symbols("   "), Err(GuessError::InvalidClueType));
        assert_eq!(split_symbols(", ,"), Err(GuessError::InvalidClueType));
        assert_eq!(split_symbols("GY, BB"), Err(GuessError::InvalidClueType));
    }

    #[test]
    fn split_does_not_judge_symbols() {
        // Unknown symbols are reported later, after the length check
        assert_eq!(split_symbols("GXB").unwrap(), vec!['G', 'X', 'B']);
    }

    #[test]
    fn parse_reports_first_bad_symbol() {
        assert_eq!(
            parse_clues("GYXZB"),
            Err(GuessError::InvalidClueSymbol {
                symbol: 'X',
                position: 2
            })
        );
    }

    #[test]
    fn score_all_absent_and_all_correct() {
        assert_eq!(score("abcde", "fghij"), vec![Absent; 5]);
        assert_eq!(score("crane", "crane"), vec![Correct; 5]);
    }

    #[test]
    fn score_real_wordle_example() {
        // C R A N E vs S L A T E
        assert_eq!(
            score("crane", "slate"),
            vec![Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn score_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(
            score("robot", "floor"),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn score_extra_duplicates_are_absent() {
        // GEESE vs THOSE: the final E is green, the other two have no E left
        assert_eq!(
            score("geese", "those"),
            vec![Absent, Absent, Absent, Correct, Correct]
        );
    }

    #[test]
    fn score_works_for_other_lengths() {
        assert_eq!(
            score("retina", "rating"),
            vec![Correct, Absent, Correct, Correct, Correct, Present]
        );
    }

    #[test]
    fn symbols_rendering() {
        assert_eq!(clues_to_symbols(&[Correct, Present, Absent]), "GYB");
        assert_eq!(Present.to_string(), "Y");
    }
}
