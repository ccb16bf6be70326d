//! Numeral parsing (Hebrew numeral word to integer)

use crate::{
    error::{EngineError, Result},
    exceptions::known_exception,
    groups::{ThousandsGroups, Token},
};
use gematria_tables::{get_table, ValuationScheme};

/// Letters at or above this value (ק) end the strict-mode order check
const HUNDREDS: u32 = 100;

/// Parse a single Hebrew numeral word such as a year or a page number
///
/// Characters outside the scheme's table (geresh, gershayim, other
/// punctuation) are ignored. Thousands-groups are inferred from the letter
/// values: a letter worth more than its predecessor starts a new group, so
/// `ה'תשע"ד` reads as 5,774.
///
/// With `strict` set, the trailing letters worth less than 100 must be
/// written in descending order (`יצ` is rejected, `צי` is not), except for
/// the conventional spellings in [`crate::exceptions::KNOWN_NUMERALS`].
///
/// # Errors
///
/// - [`EngineError::MultiWordInput`] if the trimmed input contains whitespace
/// - [`EngineError::IllegalDigitOrder`] for a strict-mode order violation
/// - [`EngineError::InvalidArgument`] if the value does not fit in a `u64`
pub fn parse_numeral(text: &str, scheme: ValuationScheme, strict: bool) -> Result<u64> {
    let word = text.trim();
    if word.chars().any(char::is_whitespace) {
        return Err(EngineError::MultiWordInput {
            input: word.to_string(),
        });
    }

    if strict {
        if let Some(value) = known_exception(word) {
            tracing::debug!(word, value, "known irregular numeral");
            return Ok(value);
        }
    }

    let groups = ThousandsGroups::segment(word, get_table(scheme));
    if strict {
        check_trailing_order(&groups)?;
    }
    groups.value()
}

/// Walk back from the end of the word until the first hundreds letter;
/// every letter on the way must be worth at least as much as those after it.
fn check_trailing_order(groups: &ThousandsGroups) -> Result<()> {
    let mut largest: Option<Token> = None;
    for token in groups.tokens_from_end() {
        if token.value >= HUNDREDS {
            break;
        }
        if let Some(after) = largest.filter(|after| token.value < after.value) {
            tracing::debug!(letter = %token.letter, after = %after.letter, "strict order violation");
            return Err(EngineError::IllegalDigitOrder {
                letter: token.letter,
                after: after.letter,
            });
        }
        largest = Some(token);
    }
    Ok(())
}
