//! Table error types

use thiserror::Error;

/// Errors raised by the table provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A scheme name did not match any known valuation scheme
    #[error("unknown valuation scheme '{name}'")]
    UnknownScheme {
        /// The name that failed to parse
        name: String,
    },
}
