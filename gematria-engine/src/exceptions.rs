//! Conventional numerals that strict mode accepts as written
//!
//! Some numerals are customarily spelled out of descending order to avoid
//! forming a word. Strict parsing returns their fixed value directly.

/// Letter sequences with their conventional value
pub const KNOWN_NUMERALS: &[(&str, u64)] = &[("רחצ", 298), ("ער", 270)];

/// Conventional value of a known irregular numeral
pub fn known_exception(word: &str) -> Option<u64> {
    KNOWN_NUMERALS
        .iter()
        .find(|(spelling, _)| *spelling == word)
        .map(|(_, value)| *value)
}
