use precis::domain::NormalizedText;

#[test]
fn given_messy_whitespace_when_normalized_then_single_spaced_and_trimmed() {
    let normalized = NormalizedText::from_raw("  hello \t\n  world  ");

    assert_eq!(normalized.as_str(), "hello world");
}

#[test]
fn given_special_characters_when_normalized_then_removed() {
    let normalized = NormalizedText::from_raw("costs $5, right? yes! (mostly)");

    assert_eq!(normalized.as_str(), "costs 5, right? yes! mostly");
}

#[test]
fn given_kept_punctuation_and_underscores_when_normalized_then_preserved() {
    let normalized = NormalizedText::from_raw("snake_case stays. right? yes, fine!");

    assert_eq!(normalized.as_str(), "snake_case stays. right? yes, fine!");
}

#[test]
fn given_deleted_characters_between_spaces_when_normalized_then_no_double_space() {
    let normalized = NormalizedText::from_raw("a @ b # c");

    assert_eq!(normalized.as_str(), "a b c");
    assert!(!normalized.as_str().contains("  "));
}

#[test]
fn given_any_input_when_normalized_twice_then_unchanged() {
    let inputs = [
        "",
        "  a  b ",
        "hello, world! ok?",
        "x@y#z",
        "tab\tand\nnewline",
        "a @ b",
    ];

    for raw in inputs {
        let once = NormalizedText::from_raw(raw);
        let twice = NormalizedText::from_raw(once.as_str());

        assert_eq!(once, twice, "normalization not idempotent for {:?}", raw);
    }
}

#[test]
fn given_only_symbols_when_normalized_then_empty() {
    let normalized = NormalizedText::from_raw("@#$%^&*()");

    assert!(normalized.is_empty());
}

#[test]
fn given_unicode_letters_when_normalized_then_kept() {
    let normalized = NormalizedText::from_raw("naïve café");

    assert_eq!(normalized.as_str(), "naïve café");
}

#[test]
fn given_normalized_text_when_counting_words_then_whitespace_delimited() {
    let normalized = NormalizedText::from_raw("one two  three\tfour");

    assert_eq!(normalized.word_count(), 4);
}
