//! Separator stripping

/// Remove backticks, apostrophes and double quotes, and spaces when
/// `strip_spaces` is set
pub fn strip_separators(text: &str, strip_spaces: bool) -> String {
    text.chars()
        .filter(|ch| !matches!(ch, '`' | '\'' | '"') && !(strip_spaces && *ch == ' '))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_with_spaces() {
        assert_eq!(strip_separators(" יח\"ל", true), "יחל");
    }

    #[test]
    fn test_strip_keeps_spaces() {
        assert_eq!(strip_separators(" יח\"ל", false), " יחל");
    }

    #[test]
    fn test_all_separator_kinds() {
        assert_eq!(strip_separators("`ה'תשע\"ד`", true), "התשעד");
        // Only plain spaces are stripped
        assert_eq!(strip_separators("א\tב", true), "א\tב");
    }
}
