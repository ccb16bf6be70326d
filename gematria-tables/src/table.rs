//! Letter-value tables with O(1) lookup
//!
//! The Hebrew letter block (U+05D0..U+05EA) is contiguous, final forms
//! included, so a table is a dense array indexed by the code point offset
//! from `א`. A zero slot means the letter is absent from the table.

use crate::scheme::ValuationScheme;

const FIRST_LETTER: char = 'א';
const SLOTS: usize = 27;

/// The 22 base letters with their absolute values, in alphabetic order
pub const BASE_LETTERS: [(char, u32); 22] = [
    ('א', 1),
    ('ב', 2),
    ('ג', 3),
    ('ד', 4),
    ('ה', 5),
    ('ו', 6),
    ('ז', 7),
    ('ח', 8),
    ('ט', 9),
    ('י', 10),
    ('כ', 20),
    ('ל', 30),
    ('מ', 40),
    ('נ', 50),
    ('ס', 60),
    ('ע', 70),
    ('פ', 80),
    ('צ', 90),
    ('ק', 100),
    ('ר', 200),
    ('ש', 300),
    ('ת', 400),
];

/// Final forms (sofiyot) paired with their base letter
pub const FINAL_FORMS: [(char, char); 5] = [
    ('ך', 'כ'),
    ('ם', 'מ'),
    ('ן', 'נ'),
    ('ף', 'פ'),
    ('ץ', 'צ'),
];

/// Values of the final forms under mispar gadol, in `FINAL_FORMS` order
const ALTERNATE_FINAL_VALUES: [u32; 5] = [500, 600, 700, 800, 900];

/// Canonical iteration order: base letters first, then the final forms
const CANONICAL_ORDER: [char; SLOTS] = [
    'א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט', 'י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ', 'ק',
    'ר', 'ש', 'ת', 'ך', 'ם', 'ן', 'ף', 'ץ',
];

#[inline]
fn slot(ch: char) -> Option<usize> {
    let offset = (ch as u32).checked_sub(FIRST_LETTER as u32)? as usize;
    (offset < SLOTS).then_some(offset)
}

/// Immutable mapping from Hebrew letter to value under one scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterValueTable {
    scheme: ValuationScheme,
    values: [u32; SLOTS],
    len: usize,
}

impl LetterValueTable {
    /// Build the table for a scheme from scratch
    ///
    /// Prefer [`crate::get_table`], which builds each table once and shares it.
    pub fn build(scheme: ValuationScheme) -> Self {
        match scheme {
            ValuationScheme::Absolute => Self::absolute(),
            ValuationScheme::AbsoluteAlternate => Self::absolute_alternate(),
            ValuationScheme::AbsoluteNoFinalForms => {
                let mut table = Self::absolute().rescheme(scheme);
                for (final_form, _) in FINAL_FORMS {
                    table.remove(final_form);
                }
                table
            }
            ValuationScheme::Reduced => {
                let mut table = Self::absolute_alternate().rescheme(scheme);
                for value in table.values.iter_mut().filter(|v| **v > 0) {
                    *value = reduce(*value);
                }
                table
            }
            ValuationScheme::Ordinal => {
                let absolute = Self::absolute();
                let mut table = Self::empty(scheme);
                for (position, (letter, _)) in absolute.entries().enumerate() {
                    table.set(letter, position as u32 + 1);
                }
                table
            }
        }
    }

    fn empty(scheme: ValuationScheme) -> Self {
        Self {
            scheme,
            values: [0; SLOTS],
            len: 0,
        }
    }

    fn absolute() -> Self {
        let mut table = Self::empty(ValuationScheme::Absolute);
        for (letter, value) in BASE_LETTERS {
            table.set(letter, value);
        }
        for (final_form, base) in FINAL_FORMS {
            if let Some(value) = table.value(base) {
                table.set(final_form, value);
            }
        }
        table
    }

    fn absolute_alternate() -> Self {
        let mut table = Self::absolute().rescheme(ValuationScheme::AbsoluteAlternate);
        for ((final_form, _), value) in FINAL_FORMS.into_iter().zip(ALTERNATE_FINAL_VALUES) {
            table.set(final_form, value);
        }
        table
    }

    fn rescheme(mut self, scheme: ValuationScheme) -> Self {
        self.scheme = scheme;
        self
    }

    fn set(&mut self, letter: char, value: u32) {
        if let Some(idx) = slot(letter) {
            if self.values[idx] == 0 {
                self.len += 1;
            }
            self.values[idx] = value;
        }
    }

    fn remove(&mut self, letter: char) {
        if let Some(idx) = slot(letter) {
            if self.values[idx] != 0 {
                self.len -= 1;
                self.values[idx] = 0;
            }
        }
    }

    /// Scheme this table was built for
    pub fn scheme(&self) -> ValuationScheme {
        self.scheme
    }

    /// Value of a letter, `None` for anything not in the table
    #[inline]
    pub fn value(&self, ch: char) -> Option<u32> {
        slot(ch)
            .map(|idx| self.values[idx])
            .filter(|value| *value > 0)
    }

    /// Check whether a character is a letter of this table
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.value(ch).is_some()
    }

    /// Number of letters in the table
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for tables built from a scheme
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `(letter, value)` pairs: the 22 base letters א..ת, then the final forms
    pub fn entries(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        CANONICAL_ORDER
            .iter()
            .filter_map(move |&letter| self.value(letter).map(|value| (letter, value)))
    }
}

/// Collapse a value to its leading decimal digit
fn reduce(value: u32) -> u32 {
    if value <= 9 {
        value
    } else if value % 100 == 0 {
        value / 100
    } else if value % 10 == 0 {
        value / 10
    } else {
        value
    }
}
