//! High-level configuration API

use crate::error::{ApiError, Result};
use gematria_engine::RenderOptions;
use gematria_tables::{get_table, ValuationScheme};

/// Calculator configuration
///
/// Carries the defaults that [`crate::Calculator`] applies when a call does
/// not override them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Scheme used when none is given
    pub default_scheme: ValuationScheme,
    /// Parse in strict mode unless a call says otherwise
    pub strict_by_default: bool,
    /// Rendering options used by `render_numeral`
    pub render: RenderOptions,
}

impl Config {
    /// Strict parsing by default
    pub fn strict() -> Self {
        Self {
            strict_by_default: true,
            ..Self::default()
        }
    }

    /// Render without separators
    pub fn plain() -> Self {
        Self {
            render: RenderOptions::plain(),
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        let letters = get_table(ValuationScheme::Absolute);
        for (name, separator) in [
            ("thousands separator", self.render.thousands_separator),
            ("tens separator", self.render.tens_separator),
        ] {
            if letters.contains(separator) {
                return Err(ApiError::Config(format!(
                    "{name} '{separator}' is a Hebrew letter"
                )));
            }
            if separator.is_whitespace() {
                return Err(ApiError::Config(format!("{name} must not be whitespace")));
            }
        }
        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default valuation scheme
    pub fn scheme(mut self, scheme: ValuationScheme) -> Self {
        self.config.default_scheme = scheme;
        self
    }

    /// Set the default valuation scheme by name (`"absolute"`, `"katan"`, ...)
    pub fn scheme_code(mut self, code: &str) -> Result<Self> {
        self.config.default_scheme = code.parse()?;
        Ok(self)
    }

    /// Set the strict-mode default
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict_by_default = strict;
        self
    }

    /// Set whether rendered numerals carry separators
    pub fn include_separators(mut self, include: bool) -> Self {
        self.config.render.include_separators = include;
        self
    }

    /// Set the thousands separator
    pub fn thousands_separator(mut self, separator: char) -> Self {
        self.config.render.thousands_separator = separator;
        self
    }

    /// Set the tens separator
    pub fn tens_separator(mut self, separator: char) -> Self {
        self.config.render.tens_separator = separator;
        self
    }

    /// Set which separator follows a single-letter numeral
    pub fn add_quote_after_single_char(mut self, thousands_style: bool) -> Self {
        self.config.render.add_quote_after_single_char = thousands_style;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
