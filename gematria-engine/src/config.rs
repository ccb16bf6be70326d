//! Configuration types for the engine

/// Default configuration constants
pub mod defaults {
    /// Separator between thousands-groups, and the mark after a lone letter
    pub const THOUSANDS_SEPARATOR: char = '\'';

    /// Separator placed before the last letter of a numeral
    pub const TENS_SEPARATOR: char = '"';
}

/// Options controlling how an integer is rendered as a Hebrew numeral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Insert thousands and tens separators
    pub include_separators: bool,
    /// Character between thousands-groups (geresh)
    pub thousands_separator: char,
    /// Character before the last letter (gershayim)
    pub tens_separator: char,
    /// Mark a single-letter result with the thousands separator (true) or
    /// the tens separator (false)
    pub add_quote_after_single_char: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_separators: true,
            thousands_separator: defaults::THOUSANDS_SEPARATOR,
            tens_separator: defaults::TENS_SEPARATOR,
            add_quote_after_single_char: true,
        }
    }
}

impl RenderOptions {
    /// Letters only, no separators
    pub fn plain() -> Self {
        Self {
            include_separators: false,
            ..Self::default()
        }
    }

    /// Set whether separators are inserted
    pub fn with_separators(mut self, include: bool) -> Self {
        self.include_separators = include;
        self
    }

    /// Set the thousands separator
    pub fn with_thousands_separator(mut self, separator: char) -> Self {
        self.thousands_separator = separator;
        self
    }

    /// Set the tens separator
    pub fn with_tens_separator(mut self, separator: char) -> Self {
        self.tens_separator = separator;
        self
    }

    /// Set which separator follows a single-letter result
    pub fn with_quote_after_single_char(mut self, thousands_style: bool) -> Self {
        self.add_quote_after_single_char = thousands_style;
        self
    }

    /// Mark appended after a single-letter result
    pub(crate) fn single_char_mark(&self) -> char {
        if self.add_quote_after_single_char {
            self.thousands_separator
        } else {
            self.tens_separator
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!(options.include_separators);
        assert_eq!(options.thousands_separator, '\'');
        assert_eq!(options.tens_separator, '"');
        assert_eq!(options.single_char_mark(), '\'');
    }

    #[test]
    fn test_plain_preset() {
        let options = RenderOptions::plain();
        assert!(!options.include_separators);
        assert_eq!(options.thousands_separator, defaults::THOUSANDS_SEPARATOR);
    }

    #[test]
    fn test_single_char_mark_uses_tens_separator() {
        let options = RenderOptions::default()
            .with_tens_separator('״')
            .with_quote_after_single_char(false);
        assert_eq!(options.single_char_mark(), '״');
    }
}
