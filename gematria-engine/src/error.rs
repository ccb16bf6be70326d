//! Engine error types

use thiserror::Error;

/// Errors raised while summing, parsing or rendering numerals
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Empty, out-of-range or otherwise unusable argument
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected
        reason: String,
    },

    /// A numeral parse was given more than one word
    #[error("source string contains more than one word: '{input}'")]
    MultiWordInput {
        /// The trimmed input
        input: String,
    },

    /// Strict mode found trailing letters under 100 out of descending order
    #[error("in strict mode, trailing values less than 100 (ק) must appear in descending order: '{letter}' precedes '{after}'")]
    IllegalDigitOrder {
        /// The smaller letter written first
        letter: char,
        /// The larger letter that follows it
        after: char,
    },
}

impl EngineError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        EngineError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
