//! Basic tests for gematria-engine

use gematria_engine::*;

#[test]
fn test_sum_value() {
    assert_eq!(sum_value("אבגתץ", ValuationScheme::Absolute).unwrap(), 496);
    assert_eq!(sum_value("שלום", ValuationScheme::Absolute).unwrap(), 376);
    assert_eq!(sum_value("שלום", ValuationScheme::Ordinal).unwrap(), 21 + 12 + 6 + 24);
    assert!(matches!(
        sum_value("", ValuationScheme::Absolute),
        Err(EngineError::InvalidArgument { .. })
    ));
}

#[test]
fn test_parse_numeral() {
    assert_eq!(parse_numeral("תשעד", ValuationScheme::Absolute, false).unwrap(), 774);
    assert_eq!(parse_numeral("התשעד", ValuationScheme::Absolute, false).unwrap(), 5774);
    assert_eq!(
        parse_numeral("ה'תשע\"ד", ValuationScheme::Absolute, false).unwrap(),
        5774
    );
    assert_eq!(
        parse_numeral("כב'רמג'ללה", ValuationScheme::Absolute, false).unwrap(),
        22_243_065
    );
}

#[test]
fn test_parse_multiple_words() {
    let err = parse_numeral("תשעד גב", ValuationScheme::Absolute, false).unwrap_err();
    assert!(matches!(err, EngineError::MultiWordInput { .. }));
    assert!(err.to_string().contains("more than one word"));
}

#[test]
fn test_parse_strict_mode() {
    for word in ["אי", "יצ", "תכמ", "קאי"] {
        assert!(matches!(
            parse_numeral(word, ValuationScheme::Absolute, true),
            Err(EngineError::IllegalDigitOrder { .. })
        ));
    }
    assert_eq!(parse_numeral("רחצ", ValuationScheme::Absolute, true).unwrap(), 298);
    assert_eq!(known_exception("רחצ"), Some(298));
}

#[test]
fn test_render_numeral() {
    let defaults = RenderOptions::default();
    let plain = RenderOptions::plain();

    assert_eq!(render_numeral(0, &defaults).unwrap(), "");
    assert_eq!(render_numeral(5, &plain).unwrap(), "ה");
    assert_eq!(render_numeral(12, &defaults).unwrap(), "י\"ב");
    assert_eq!(render_numeral(15, &plain).unwrap(), "טו");
    assert_eq!(render_numeral(16, &plain).unwrap(), "טז");
    assert_eq!(render_numeral(613, &defaults).unwrap(), "תרי\"ג");
    assert_eq!(render_numeral(5767, &defaults).unwrap(), "ה'תשס\"ז");
    assert_eq!(render_numeral(1_024_999, &defaults).unwrap(), "א'כד'תתקצ\"ט");
    assert!(render_numeral(-1, &defaults).is_err());
}

#[test]
fn test_render_never_uses_final_forms() {
    let table = get_table(ValuationScheme::Absolute);
    for n in [20, 40, 50, 80, 90, 540, 1290] {
        let rendered = render_numeral(n, &RenderOptions::plain()).unwrap();
        for (final_form, _) in gematria_tables::FINAL_FORMS {
            assert!(!rendered.contains(final_form), "{n} rendered as {rendered}");
        }
        assert!(rendered.chars().all(|ch| table.contains(ch)));
    }
}

#[test]
fn test_strip_separators() {
    assert_eq!(strip_separators(" יח\"ל", true), "יחל");
    assert_eq!(strip_separators(" יח\"ל", false), " יחל");
}

#[test]
fn test_thousands_groups() {
    let groups = ThousandsGroups::segment("ה'תשע\"ד", get_table(ValuationScheme::Absolute));
    assert_eq!(groups.groups().len(), 2);
    assert_eq!(groups.value().unwrap(), 5774);
}
