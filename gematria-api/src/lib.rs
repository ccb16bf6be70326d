//! Public API for gematria
//!
//! This crate provides a stable interface over the numeral engine: sum the
//! letters of Hebrew text, parse a Hebrew numeral word into an integer, and
//! render an integer as a Hebrew numeral.
//!
//! # Example
//!
//! ```rust
//! use gematria_api::{Calculator, Config};
//!
//! let calculator = Calculator::new();
//! assert_eq!(calculator.parse_numeral("ה'תשע\"ד").unwrap(), 5774);
//! assert_eq!(calculator.render_numeral(5767).unwrap(), "ה'תשס\"ז");
//!
//! let strict = Calculator::with_config(Config::strict()).unwrap();
//! assert!(strict.parse_numeral("יצ").is_err());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;

use error::Result;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use error::{ApiError, ErrorKind};
pub use gematria_engine::{known_exception, RenderOptions};
pub use gematria_tables::{get_table, LetterValueTable, ValuationScheme};

/// Main entry point for gematria calculations
///
/// A calculator owns its [`Config`], so the strict-mode default and render
/// options are per instance rather than process-wide.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    config: Config,
}

impl Calculator {
    /// Create a calculator with the default configuration (absolute values,
    /// lenient parsing, default separators)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sum the letters of `text` under the default scheme
    pub fn sum_value(&self, text: &str) -> Result<u64> {
        self.sum_value_with(text, self.config.default_scheme)
    }

    /// Sum the letters of `text` under a specific scheme
    pub fn sum_value_with(&self, text: &str, scheme: ValuationScheme) -> Result<u64> {
        Ok(gematria_engine::sum_value(text, scheme)?)
    }

    /// Parse a numeral word with the configured scheme and strictness
    pub fn parse_numeral(&self, text: &str) -> Result<u64> {
        self.parse_numeral_with(text, self.config.default_scheme, None)
    }

    /// Parse a numeral word; `strict: None` falls back to the configured default
    pub fn parse_numeral_with(
        &self,
        text: &str,
        scheme: ValuationScheme,
        strict: Option<bool>,
    ) -> Result<u64> {
        let strict = strict.unwrap_or(self.config.strict_by_default);
        Ok(gematria_engine::parse_numeral(text, scheme, strict)?)
    }

    /// Render `number` with the configured options
    pub fn render_numeral(&self, number: i64) -> Result<String> {
        self.render_numeral_with(number, &self.config.render)
    }

    /// Render `number` with explicit options
    pub fn render_numeral_with(&self, number: i64, options: &RenderOptions) -> Result<String> {
        Ok(gematria_engine::render_numeral(number, options)?)
    }

    /// Remove geresh, gershayim and backtick characters (and spaces)
    pub fn strip_separators(&self, text: &str, strip_spaces: bool) -> String {
        gematria_engine::strip_separators(text, strip_spaces)
    }
}

// Convenience functions

/// Sum the letters of `text` under the absolute scheme
pub fn sum_value(text: &str) -> Result<u64> {
    Calculator::new().sum_value(text)
}

/// Parse a numeral word with the default configuration
pub fn parse_numeral(text: &str) -> Result<u64> {
    Calculator::new().parse_numeral(text)
}

/// Render `number` with default separators
pub fn render_numeral(number: i64) -> Result<String> {
    Calculator::new().render_numeral(number)
}

/// Remove separator characters, and spaces when `strip_spaces` is set
pub fn strip_separators(text: &str, strip_spaces: bool) -> String {
    gematria_engine::strip_separators(text, strip_spaces)
}
