//! Word list loading utilities
//!
//! Reads newline-delimited dictionaries and filters words by length.

use super::{DictionaryError, DictionarySource};
use std::fs;
use std::path::{Path, PathBuf};

/// Whether `word` is exactly `length` lowercase ASCII letters
#[inline]
#[must_use]
pub fn is_dictionary_word(word: &str, length: usize) -> bool {
    word.len() == length && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Keep the words of exactly `length` lowercase letters
///
/// # Examples
/// ```
/// use wordle_trie::wordlists::words_of_length;
///
/// let words = words_of_length(&["crane", "tigers", "Slate", "sl4te"], 5);
/// assert_eq!(words, vec!["crane".to_string()]);
/// ```
#[must_use]
pub fn words_of_length<S: AsRef<str>>(words: &[S], length: usize) -> Vec<String> {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| is_dictionary_word(word, length))
        .map(ToString::to_string)
        .collect()
}

/// Split dictionary text into lines
///
/// Carriage returns are dropped wherever they appear, and a final line
/// without a trailing newline is still returned.
fn dictionary_lines(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .split('\n')
        .map(|line| line.chars().filter(|&c| c != '\r').collect::<String>())
}

/// Load all lowercase words from a file, whatever their length
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_trie::wordlists::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryError> {
    let content = read(path.as_ref())?;

    Ok(dictionary_lines(&content)
        .filter(|line| !line.is_empty() && is_dictionary_word(line, line.len()))
        .collect())
}

fn read(path: &Path) -> Result<String, DictionaryError> {
    fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Newline-delimited dictionary file, read in full on every request
#[derive(Debug, Clone)]
pub struct FileDictionary {
    path: PathBuf,
}

impl FileDictionary {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DictionarySource for FileDictionary {
    fn words_of_length(&self, length: usize) -> Result<Vec<String>, DictionaryError> {
        let content = read(&self.path)?;

        Ok(dictionary_lines(&content)
            .filter(|line| is_dictionary_word(line, length))
            .collect())
    }
}
