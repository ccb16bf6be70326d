//! API error types

use gematria_engine::EngineError;
use gematria_tables::TableError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Engine error
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Table error
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Kind of failure, independent of which layer raised it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty, negative or out-of-range argument
    InvalidArgument,
    /// Numeral parse given more than one word
    MultiWordInput,
    /// Strict-mode ordering violation
    IllegalDigitOrder,
    /// Rejected configuration or unknown scheme name
    Configuration,
}

impl ApiError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Engine(EngineError::InvalidArgument { .. }) => ErrorKind::InvalidArgument,
            ApiError::Engine(EngineError::MultiWordInput { .. }) => ErrorKind::MultiWordInput,
            ApiError::Engine(EngineError::IllegalDigitOrder { .. }) => {
                ErrorKind::IllegalDigitOrder
            }
            ApiError::Table(_) | ApiError::Config(_) => ErrorKind::Configuration,
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
