//! Dictionary sources for the elimination engine
//!
//! The engine only needs "every dictionary word of a given length". Anything
//! that can answer that implements [`DictionarySource`]: the embedded list,
//! a newline-delimited file, or an in-memory slice.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, EmbeddedDictionary};
pub use loader::{FileDictionary, is_dictionary_word, load_from_file, words_of_length};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce dictionary words
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Produces all dictionary words of a given length
///
/// Implementations return lowercase ASCII words of exactly `length` letters.
pub trait DictionarySource {
    /// # Errors
    ///
    /// Returns `DictionaryError` if the underlying storage cannot be read.
    fn words_of_length(&self, length: usize) -> Result<Vec<String>, DictionaryError>;
}

impl<S: AsRef<str>> DictionarySource for [S] {
    fn words_of_length(&self, length: usize) -> Result<Vec<String>, DictionaryError> {
        Ok(words_of_length(self, length))
    }
}

impl<S: AsRef<str>> DictionarySource for Vec<S> {
    fn words_of_length(&self, length: usize) -> Result<Vec<String>, DictionaryError> {
        self.as_slice().words_of_length(length)
    }
}

impl<S: AsRef<str>, const N: usize> DictionarySource for [S; N] {
    fn words_of_length(&self, length: usize) -> Result<Vec<String>, DictionaryError> {
        self.as_slice().words_of_length(length)
    }
}

impl<D: DictionarySource + ?Sized> DictionarySource for Box<D> {
    fn words_of_length(&self, length: usize) -> Result<Vec<String>, DictionaryError> {
        (**self).words_of_length(length)
    }
}
