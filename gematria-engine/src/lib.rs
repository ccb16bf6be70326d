//! Hebrew numeral engine
//!
//! This crate provides the gematria algorithms on top of the letter tables
//! from `gematria-tables`: summing the letters of free text, parsing a
//! numeral word into an integer, and rendering an integer back into a
//! Hebrew numeral.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod exceptions;
pub mod groups;
pub mod parser;
pub mod renderer;
pub mod strip;
pub mod summation;

// Re-export key types
pub use config::RenderOptions;
pub use error::{EngineError, Result};
pub use exceptions::known_exception;
pub use groups::{ThousandsGroups, Token};
pub use parser::parse_numeral;
pub use renderer::render_numeral;
pub use strip::strip_separators;
pub use summation::sum_value;

// Re-export from tables for convenience
pub use gematria_tables::{get_table, LetterValueTable, ValuationScheme};
