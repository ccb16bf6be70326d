//! Valuation schemes

use crate::error::TableError;
use std::fmt;
use std::str::FromStr;

/// Method used to assign a numeric value to each Hebrew letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ValuationScheme {
    /// Mispar hechrachi: full value of the 22 letters, final forms share the
    /// value of their base letter
    #[default]
    Absolute,
    /// Mispar gadol: final forms continue the sequence past 400 (500..900)
    AbsoluteAlternate,
    /// Absolute values without the five final forms
    AbsoluteNoFinalForms,
    /// Mispar katan: the leading digit of each mispar gadol value
    Reduced,
    /// Mispar siduri: position of the letter in the alphabet (1..27)
    Ordinal,
}

impl ValuationScheme {
    /// Every scheme, in declaration order
    pub const ALL: [ValuationScheme; 5] = [
        ValuationScheme::Absolute,
        ValuationScheme::AbsoluteAlternate,
        ValuationScheme::AbsoluteNoFinalForms,
        ValuationScheme::Reduced,
        ValuationScheme::Ordinal,
    ];

    /// Stable kebab-case code for the scheme
    pub fn code(&self) -> &'static str {
        match self {
            ValuationScheme::Absolute => "absolute",
            ValuationScheme::AbsoluteAlternate => "absolute-alternate",
            ValuationScheme::AbsoluteNoFinalForms => "absolute-no-final-forms",
            ValuationScheme::Reduced => "reduced",
            ValuationScheme::Ordinal => "ordinal",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            ValuationScheme::Absolute => "Absolute (mispar hechrachi)",
            ValuationScheme::AbsoluteAlternate => "Absolute alternate (mispar gadol)",
            ValuationScheme::AbsoluteNoFinalForms => "Absolute without final forms",
            ValuationScheme::Reduced => "Reduced (mispar katan)",
            ValuationScheme::Ordinal => "Ordinal (mispar siduri)",
        }
    }

    /// Whether tables for this scheme carry the five final-form letters
    pub fn has_final_forms(&self) -> bool {
        !matches!(self, ValuationScheme::AbsoluteNoFinalForms)
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            ValuationScheme::Absolute => 0,
            ValuationScheme::AbsoluteAlternate => 1,
            ValuationScheme::AbsoluteNoFinalForms => 2,
            ValuationScheme::Reduced => 3,
            ValuationScheme::Ordinal => 4,
        }
    }
}

impl FromStr for ValuationScheme {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "absolute" | "hechrachi" => Ok(ValuationScheme::Absolute),
            "absolute-alternate" | "gadol" => Ok(ValuationScheme::AbsoluteAlternate),
            "absolute-no-final-forms" | "absolute-no-sofiyot" => {
                Ok(ValuationScheme::AbsoluteNoFinalForms)
            }
            "reduced" | "katan" => Ok(ValuationScheme::Reduced),
            "ordinal" | "siduri" => Ok(ValuationScheme::Ordinal),
            _ => Err(TableError::UnknownScheme {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ValuationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for scheme in ValuationScheme::ALL {
            assert_eq!(scheme.code().parse::<ValuationScheme>().unwrap(), scheme);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(
            "Gadol".parse::<ValuationScheme>().unwrap(),
            ValuationScheme::AbsoluteAlternate
        );
        assert_eq!(
            "absolute_no_sofiyot".parse::<ValuationScheme>().unwrap(),
            ValuationScheme::AbsoluteNoFinalForms
        );
        assert_eq!(
            " katan ".parse::<ValuationScheme>().unwrap(),
            ValuationScheme::Reduced
        );
    }

    #[test]
    fn test_unknown_scheme() {
        let err = "atbash".parse::<ValuationScheme>().unwrap_err();
        assert!(matches!(err, TableError::UnknownScheme { ref name } if name == "atbash"));
    }

    #[test]
    fn test_indices_are_distinct() {
        let mut seen = [false; 5];
        for scheme in ValuationScheme::ALL {
            assert!(!seen[scheme.index()]);
            seen[scheme.index()] = true;
        }
    }
}
