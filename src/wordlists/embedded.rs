//! Embedded dictionary
//!
//! Word list compiled into the binary at build time.

use super::{DictionaryError, DictionarySource, words_of_length};

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));

/// Dictionary backed by the compiled-in word list
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDictionary;

impl DictionarySource for EmbeddedDictionary {
    fn words_of_length(&self, length: usize) -> Result<Vec<String>, DictionaryError> {
        Ok(words_of_length(DICTIONARY, length))
    }
}
