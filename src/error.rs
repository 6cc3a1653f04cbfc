// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LookupError>;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Couldn't connect to the dictionary site for '{word}': {message}")]
    Transport { word: String, message: String },

    #[error("Unexpected status {status} for '{word}', likely a non-word was passed")]
    UnexpectedStatus { word: String, status: u16 },

    #[error("Malformed HTML returned for '{word}': {message}")]
    MalformedDocument { word: String, message: String },

    #[error("No definitions module found in the document")]
    DefinitionsNotFound,

    #[error("Definition list {list_index} has no matching dictionary heading")]
    MissingHeading { list_index: usize },

    #[error("Dictionary heading {list_index} has no usable text")]
    EmptyDictionaryName { list_index: usize },

    #[error("Definition {item_index} in list {list_index} has no text after its word type")]
    EmptyDefinitionText { list_index: usize, item_index: usize },

    #[error("Lookup task for '{0}' ended without reporting a result")]
    TaskFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Connection-level failure reported by a page fetcher.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct TransportError(pub String);
