//! Free-text gematria summation

use crate::error::{EngineError, Result};
use gematria_tables::{get_table, ValuationScheme};

/// Sum the values of every Hebrew letter in `text`
///
/// Anything the scheme does not know (spaces, punctuation, Latin letters,
/// vowel points) counts as zero.
///
/// # Errors
///
/// [`EngineError::InvalidArgument`] if `text` is empty.
pub fn sum_value(text: &str, scheme: ValuationScheme) -> Result<u64> {
    if text.is_empty() {
        return Err(EngineError::invalid_argument("source string is empty"));
    }
    let table = get_table(scheme);
    Ok(text
        .chars()
        .filter_map(|ch| table.value(ch))
        .map(u64::from)
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_rejected() {
        assert!(matches!(
            sum_value("", ValuationScheme::Absolute),
            Err(EngineError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_no_hebrew_is_zero() {
        assert_eq!(sum_value("absdefg", ValuationScheme::Absolute).unwrap(), 0);
    }

    #[test]
    fn test_one_word() {
        assert_eq!(
            sum_value("אבגתץ", ValuationScheme::Absolute).unwrap(),
            1 + 2 + 3 + 400 + 90
        );
    }

    #[test]
    fn test_multiple_words() {
        assert_eq!(
            sum_value("מנץ אבגת", ValuationScheme::Absolute).unwrap(),
            1 + 2 + 3 + 400 + 40 + 50 + 90
        );
    }

    #[test]
    fn test_non_hebrew_is_ignored() {
        assert_eq!(
            sum_value(" jk f.אבגת", ValuationScheme::Absolute).unwrap(),
            1 + 2 + 3 + 400
        );
    }

    #[test]
    fn test_schemes_differ_on_final_forms() {
        assert_eq!(sum_value("ץ", ValuationScheme::Absolute).unwrap(), 90);
        assert_eq!(sum_value("ץ", ValuationScheme::AbsoluteAlternate).unwrap(), 900);
        assert_eq!(sum_value("ץ", ValuationScheme::AbsoluteNoFinalForms).unwrap(), 0);
        assert_eq!(sum_value("ץ", ValuationScheme::Reduced).unwrap(), 9);
        assert_eq!(sum_value("ץ", ValuationScheme::Ordinal).unwrap(), 27);
    }
}
