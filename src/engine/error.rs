//! Engine construction errors

use crate::wordlists::DictionaryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("word length must be at least 1")]
    ZeroLength,

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}
