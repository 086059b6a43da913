// src/error.rs
use thiserror::Error;

/// Errors raised at the configuration boundary. `process` itself never fails.
#[derive(Error, Debug)]
pub enum DogeifyError {
    #[error("invalid ignore word {word:?}: must be a single non-empty token")]
    InvalidIgnoreWord { word: String },

    #[error("invalid ignore pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

pub type DogeifyResult<T> = Result<T, DogeifyError>;
