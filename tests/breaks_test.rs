// breaks_test.rs - Integration tests for line and word break finding.

use unitext::breaks::{BreakFinder, LineBreak, Linebreaker, WordBreak, Wordbreaker};

/// Splits `text` into lines at every allowed or required break.
fn segments(text: &str, breaks: &[LineBreak]) -> Vec<String> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, b) in breaks.iter().enumerate() {
        if matches!(b, LineBreak::MustBreak | LineBreak::AllowBreak) {
            out.push(text[start..=i].to_string());
            start = i + 1;
        }
    }
    out
}

// === Line Breaks ===

#[test]
fn one_status_per_code_unit() {
    let text = "\u{431}\u{44a}\u{440}\u{437}\u{43e} \u{43a}\u{430}\u{444}\u{44f}\u{432}\u{43e}";
    let lb = Linebreaker::new("bg");
    assert_eq!(lb.find_breaks(text).len(), text.len());

    let units: Vec<u16> = text.encode_utf16().collect();
    assert_eq!(lb.find_breaks_utf16(&units).unwrap().len(), units.len());

    let chars: Vec<char> = text.chars().collect();
    assert_eq!(lb.find_breaks_utf32(&chars).len(), chars.len());
}

#[test]
fn last_unit_must_break() {
    let lb = Linebreaker::default();
    for text in ["x", "no trailing newline", "\u{65e5}\u{672c}"] {
        assert_eq!(lb.find_breaks(text).last(), Some(&LineBreak::MustBreak));
    }
}

#[test]
fn inside_char_marks_continuation_units() {
    let text = "\u{65e5}";
    assert_eq!(
        Linebreaker::default().find_breaks(text),
        vec![LineBreak::InsideChar, LineBreak::InsideChar, LineBreak::MustBreak]
    );
}

#[test]
fn lines_split_after_spaces() {
    let text = "The quick brown fox";
    let breaks = Linebreaker::default().find_breaks(text);
    assert_eq!(
        segments(text, &breaks),
        vec!["The ", "quick ", "brown ", "fox"]
    );
}

#[test]
fn ideographs_allow_breaks_between_them() {
    let chars: Vec<char> = "\u{65e5}\u{672c}\u{8a9e}".chars().collect();
    let breaks = Linebreaker::default().find_breaks_utf32(&chars);
    assert_eq!(
        breaks,
        vec![LineBreak::AllowBreak, LineBreak::AllowBreak, LineBreak::MustBreak]
    );
}

#[test]
fn no_break_before_closing_punctuation() {
    let breaks = Linebreaker::default().find_breaks("a)");
    assert_eq!(breaks[0], LineBreak::NoBreak);
}

// === Word Breaks ===

#[test]
fn words_and_punctuation() {
    let text = "Hello, world";
    let breaks = Wordbreaker::new("en").find_breaks(text);
    let ends: Vec<usize> = breaks
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == WordBreak::AllowBreak)
        .map(|(i, _)| i + 1)
        .collect();
    assert_eq!(ends, vec![5, 6, 7, 12]);
}

#[test]
fn word_breaks_in_utf16() {
    let units: Vec<u16> = "\u{10346}\u{10347} x".encode_utf16().collect();
    let breaks = Wordbreaker::default().find_breaks_utf16(&units).unwrap();
    assert_eq!(breaks.len(), units.len());
    assert_eq!(breaks[0], WordBreak::InsideChar);
    assert_eq!(breaks.last(), Some(&WordBreak::AllowBreak));
}

#[test]
fn finders_behind_the_trait() {
    fn count_units<F: BreakFinder>(finder: &F, text: &str) -> usize {
        finder.find_breaks(text).len()
    }
    assert_eq!(count_units(&Linebreaker::default(), "abc"), 3);
    assert_eq!(count_units(&Wordbreaker::default(), "abc"), 3);
}
