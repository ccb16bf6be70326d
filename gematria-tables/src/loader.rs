//! Table provider
//!
//! Each scheme's table is built on first access and cached for the life of
//! the process.

use crate::{scheme::ValuationScheme, table::LetterValueTable};
use std::sync::OnceLock;

static TABLES: [OnceLock<LetterValueTable>; ValuationScheme::ALL.len()] =
    [const { OnceLock::new() }; ValuationScheme::ALL.len()];

/// Get the letter-value table for a scheme
pub fn get_table(scheme: ValuationScheme) -> &'static LetterValueTable {
    TABLES[scheme.index()].get_or_init(|| {
        let table = LetterValueTable::build(scheme);
        tracing::debug!(
            scheme = scheme.code(),
            letters = table.len(),
            "built letter-value table"
        );
        table
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_same_instance_on_repeat_calls() {
        for scheme in ValuationScheme::ALL {
            let first = get_table(scheme);
            let second = get_table(scheme);
            assert!(std::ptr::eq(first, second));
            assert_eq!(first.scheme(), scheme);
        }
    }

    #[test]
    fn test_concurrent_first_use() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| get_table(ValuationScheme::Reduced) as *const _ as usize))
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
