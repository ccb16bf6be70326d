//! Numeral rendering (integer to Hebrew numeral)

use crate::{
    config::RenderOptions,
    error::{EngineError, Result},
};
use gematria_tables::{get_table, ValuationScheme};
use std::sync::OnceLock;

/// Letters usable as numerals, largest value first. Final forms never appear
/// in numerals.
fn denominations() -> &'static [(u32, char)] {
    static DENOMINATIONS: OnceLock<Vec<(u32, char)>> = OnceLock::new();
    DENOMINATIONS.get_or_init(|| {
        let mut letters: Vec<(u32, char)> = get_table(ValuationScheme::AbsoluteNoFinalForms)
            .entries()
            .map(|(letter, value)| (value, letter))
            .collect();
        letters.sort_unstable_by(|a, b| b.0.cmp(&a.0));
        letters
    })
}

/// Render a non-negative integer as a Hebrew numeral
///
/// Each base-1000 group is rendered on its own, highest first. Fifteen and
/// sixteen are written ט"ו and ט"ז rather than spelling part of the divine
/// name.
///
/// ```text
/// 8         => ח'
/// 15        => ט"ו
/// 245       => רמ"ה
/// 5,767     => ה'תשס"ז
/// 1,024,999 => א'כד'תתקצ"ט
/// ```
///
/// Zero renders as the empty string.
///
/// # Errors
///
/// [`EngineError::InvalidArgument`] if `number` is negative.
pub fn render_numeral(number: i64, options: &RenderOptions) -> Result<String> {
    let mut remaining = u64::try_from(number)
        .map_err(|_| EngineError::invalid_argument(format!("number {number} is less than zero")))?;

    let mut groups = Vec::new();
    while remaining > 0 {
        groups.push((remaining % 1000) as u32);
        remaining /= 1000;
    }

    let mut out = String::new();
    let mut letters = 0;
    for group in groups.into_iter().rev().filter(|group| *group > 0) {
        if options.include_separators && !out.is_empty() {
            out.push(options.thousands_separator);
        }
        letters += render_group(group, &mut out);
    }

    if options.include_separators && letters > 0 {
        if letters > 1 {
            let last = out.char_indices().last().map_or(0, |(idx, _)| idx);
            out.insert(last, options.tens_separator);
        } else {
            out.push(options.single_char_mark());
        }
    }

    Ok(out)
}

/// Append the letters for a value in `1..=999`, returning how many were written
fn render_group(mut value: u32, out: &mut String) -> usize {
    let mut written = 0;
    while value > 0 {
        match value {
            15 => {
                out.push_str("טו");
                return written + 2;
            }
            16 => {
                out.push_str("טז");
                return written + 2;
            }
            _ => {}
        }
        let Some(&(denomination, letter)) = denominations()
            .iter()
            .find(|(denomination, _)| *denomination <= value)
        else {
            break;
        };
        out.push(letter);
        written += 1;
        value -= denomination;
    }
    written
}
