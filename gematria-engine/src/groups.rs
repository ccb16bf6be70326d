//! Thousands-group segmentation
//!
//! Within one thousands-group letter values never increase when read left to
//! right. A letter worth more than the one before it therefore starts a new
//! group: `התשעד` splits into `ה` and `תשעד` (5 and 774, i.e. 5774).

use crate::error::{EngineError, Result};
use gematria_tables::LetterValueTable;
use smallvec::SmallVec;

/// A recognized letter and its value under the active scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Source letter
    pub letter: char,
    /// Value of the letter
    pub value: u32,
}

/// One thousands-group, in input order
pub type Group = SmallVec<[Token; 4]>;

/// Fold state while scanning a word
#[derive(Debug, Default)]
struct Segmenter {
    groups: Vec<Group>,
    current: Group,
    previous: u32,
}

impl Segmenter {
    fn push(mut self, token: Token) -> Self {
        if token.value > self.previous && !self.current.is_empty() {
            tracing::trace!(letter = %token.letter, value = token.value, "new thousands-group");
            self.groups.push(std::mem::take(&mut self.current));
        }
        self.current.push(token);
        self.previous = token.value;
        self
    }

    fn finish(mut self) -> Vec<Group> {
        self.groups.push(self.current);
        self.groups
    }
}

/// Thousands-groups of a numeral word, highest place first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThousandsGroups {
    groups: Vec<Group>,
}

impl ThousandsGroups {
    /// Split a word into groups, skipping characters absent from the table
    pub fn segment(word: &str, table: &LetterValueTable) -> Self {
        let groups = word
            .chars()
            .filter_map(|letter| table.value(letter).map(|value| Token { letter, value }))
            .fold(Segmenter::default(), Segmenter::push)
            .finish();
        Self { groups }
    }

    /// Groups in input order (highest thousands place first)
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Every token, starting from the last letter of the word
    pub fn tokens_from_end(&self) -> impl Iterator<Item = Token> + '_ {
        self.groups
            .iter()
            .rev()
            .flat_map(|group| group.iter().rev().copied())
    }

    /// Sum each group and weight it by its thousands place
    pub fn value(&self) -> Result<u64> {
        self.groups
            .iter()
            .rev()
            .enumerate()
            .try_fold(0u64, |total, (place, group)| {
                let sum: u64 = group.iter().map(|token| u64::from(token.value)).sum();
                if sum == 0 {
                    return Ok(total);
                }
                u32::try_from(place)
                    .ok()
                    .and_then(|place| 1000u64.checked_pow(place))
                    .and_then(|multiplier| sum.checked_mul(multiplier))
                    .and_then(|weighted| total.checked_add(weighted))
                    .ok_or_else(|| EngineError::invalid_argument("numeral value exceeds u64"))
            })
    }
}
