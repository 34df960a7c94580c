// text_test.rs - Integration tests for string operations, codepoint
// properties and Unicode blocks.

use std::cmp::Ordering;

use unitext::text::{casefold, icompare, is_normalized, normalize, to_lower, to_upper};
use unitext::unicode::{
    self, blocks, ctype, Block, Ctype, NormalizationForm, BLOCKS, STANDARD_CHARSET,
};

// === Normalization ===

#[test]
fn all_four_forms() {
    let text = "\u{1e9b}\u{323}";
    assert_eq!(normalize(text, NormalizationForm::Nfc), "\u{1e9b}\u{323}");
    assert_eq!(normalize(text, NormalizationForm::Nfd), "\u{17f}\u{323}\u{307}");
    assert_eq!(normalize(text, NormalizationForm::Nfkc), "\u{1e69}");
    assert_eq!(normalize(text, NormalizationForm::Nfkd), "s\u{323}\u{307}");
}

#[test]
fn normalized_text_is_unchanged() {
    for form in [
        NormalizationForm::Nfc,
        NormalizationForm::Nfd,
        NormalizationForm::Nfkc,
        NormalizationForm::Nfkd,
    ] {
        let once = normalize("Ame\u{301}lie \u{212b}", form);
        assert!(is_normalized(&once, form));
        assert_eq!(normalize(&once, form), once);
    }
}

// === Case ===

#[test]
fn case_folding_and_comparison() {
    assert_eq!(casefold("F\u{dc}\u{df}BALL"), "f\u{fc}ssball");
    assert_eq!(icompare("F\u{dc}\u{df}BALL", "fu\u{308}ssball"), Ordering::Equal);
    assert_eq!(icompare("\u{3a3}", "\u{3c2}"), Ordering::Equal);
    assert_ne!(icompare("th\u{1a1}", "tho"), Ordering::Equal);
}

#[test]
fn full_case_mapping() {
    assert_eq!(to_upper("th\u{1a1}"), "TH\u{1a0}");
    assert_eq!(to_lower("\u{41f}\u{41e}\u{415}\u{417}\u{418}\u{42f}"), "\u{43f}\u{43e}\u{435}\u{437}\u{438}\u{44f}");
    assert_eq!(to_upper("\u{df}"), "SS");
}

#[test]
fn simple_mapping_keeps_length() {
    let chars: Vec<char> = "Stra\u{df}e".chars().collect();
    let upper = unicode::to_upper_all(&chars);
    assert_eq!(upper.len(), chars.len());
    assert_eq!(upper.iter().collect::<String>(), "STRA\u{df}E");
}

// === Properties ===

#[test]
fn ascii_classes_match_std() {
    for b in 0x20u8..0x7f {
        let c = b as char;
        assert_eq!(unicode::is_digit(c), c.is_ascii_digit(), "{:?}", c);
        assert_eq!(unicode::is_alpha(c), c.is_ascii_alphabetic(), "{:?}", c);
        assert_eq!(unicode::is_upper(c), c.is_ascii_uppercase(), "{:?}", c);
        assert!(unicode::is_printable(c));
        assert!(!unicode::is_control(c));
    }
}

#[test]
fn non_ascii_classes() {
    assert!(unicode::is_alpha('\u{8a69}'));
    assert!(unicode::is_digit('\u{966}'));
    assert!(unicode::is_alphanumeric('\u{966}'));
    assert!(unicode::is_space('\u{a0}'));
    assert!(unicode::is_punct('\u{3002}'));
    assert!(unicode::is_lower('\u{3c2}'));
    assert!(unicode::is_control('\u{feff}'));
    assert!(!unicode::is_printable('\u{2029}'));
}

#[test]
fn classes_outside_the_bmp() {
    assert!(unicode::is_digit('\u{104a0}'));
    assert!(unicode::is_digit('\u{1e950}'));
    assert!(unicode::is_punct('\u{10100}'));
    assert!(unicode::is_control('\u{1d173}'));
    assert!(!unicode::is_printable('\u{1d173}'));
    assert!(ctype('\u{10428}').contains(Ctype::ALPHA | Ctype::LOWER));
}

#[test]
fn case_classes_are_letter_categories() {
    assert!(!unicode::is_lower('\u{aa}'));
    assert!(!unicode::is_lower('\u{2b0}'));
    assert!(!unicode::is_upper('\u{24b6}'));
    assert!(unicode::is_alpha('\u{2b0}'));
    assert!(!unicode::is_printable('\u{378}'));
}

#[test]
fn ctype_combines_classes() {
    assert_eq!(
        ctype(' '),
        Ctype::SPACE | Ctype::PRINT | Ctype::ASCII
    );
    assert!(ctype('\u{1c5}').contains(Ctype::TITLE | Ctype::ALPHA));
    assert!(ctype('\u{7f}').contains(Ctype::CNTRL));
}

// === Blocks ===

#[test]
fn block_table_covers_samples() {
    assert_eq!(Block::of('\u{30a1}'), Some(&blocks::KATAKANA));
    assert_eq!(Block::of('\u{10346}').map(Block::name), Some("GOTHIC"));
    assert_eq!(Block::by_name("cjk unified ideographs").map(Block::begin), Some(0x4e00));
    assert_eq!(BLOCKS.len(), 300);
}

#[test]
fn block_charset_lists_every_scalar() {
    let chars = blocks::AEGEAN_NUMBERS.charset();
    assert_eq!(chars.len(), blocks::AEGEAN_NUMBERS.size());
    assert!(chars.iter().all(|&c| blocks::AEGEAN_NUMBERS.contains(c)));
}

#[test]
fn standard_charset_contents() {
    assert_eq!(STANDARD_CHARSET[0], ' ');
    assert!(STANDARD_CHARSET.contains(&'A'));
    assert!(STANDARD_CHARSET.contains(&'\u{20ac}'));
    assert!(STANDARD_CHARSET.windows(2).all(|w| w[0] < w[1]));
}
