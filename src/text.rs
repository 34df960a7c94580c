// text.rs - String-level Unicode operations.
// Normalization and case folding are delegated to unicode-normalization and
// unicode-casefold; case conversion uses the full mappings from std.

use std::cmp::Ordering;

use unicode_casefold::UnicodeCaseFold;
use unicode_normalization::UnicodeNormalization;

use crate::unicode::NormalizationForm;

/// Returns `text` in the requested normalization form.
pub fn normalize(text: &str, form: NormalizationForm) -> String {
    if is_normalized(text, form) {
        return text.to_string();
    }
    match form {
        NormalizationForm::Nfc => text.nfc().collect(),
        NormalizationForm::Nfd => text.nfd().collect(),
        NormalizationForm::Nfkc => text.nfkc().collect(),
        NormalizationForm::Nfkd => text.nfkd().collect(),
    }
}

/// Whether `text` is already in the requested normalization form.
pub fn is_normalized(text: &str, form: NormalizationForm) -> bool {
    match form {
        NormalizationForm::Nfc => unicode_normalization::is_nfc(text),
        NormalizationForm::Nfd => unicode_normalization::is_nfd(text),
        NormalizationForm::Nfkc => unicode_normalization::is_nfkc(text),
        NormalizationForm::Nfkd => unicode_normalization::is_nfkd(text),
    }
}

/// Full case folding (C + F mappings, non-Turkic).
pub fn casefold(text: &str) -> String {
    text.chars().case_fold().collect()
}

/// Canonical caseless comparison key: NFC of the case-folded NFD.
fn caseless_key(text: &str) -> String {
    text.nfd().case_fold().nfc().collect()
}

/// Compares two strings ignoring case and canonical-equivalence differences.
/// Ties are ordered by the folded, composed bytes.
pub fn icompare(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    caseless_key(a).as_bytes().cmp(caseless_key(b).as_bytes())
}

/// Full uppercase mapping ("straße" becomes "STRASSE").
pub fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

/// Full lowercase mapping, including final sigma.
pub fn to_lower(text: &str) -> String {
    text.to_lowercase()
}

pub fn to_upper_in_place(text: &mut String) {
    if text.is_ascii() {
        text.make_ascii_uppercase();
    } else {
        *text = text.to_uppercase();
    }
}

pub fn to_lower_in_place(text: &mut String) {
    if text.is_ascii() {
        text.make_ascii_lowercase();
    } else {
        *text = text.to_lowercase();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nfc_composes() {
        assert_eq!(normalize("e\u{301}", NormalizationForm::Nfc), "\u{e9}");
        assert_eq!(normalize("\u{e9}", NormalizationForm::Nfd), "e\u{301}");
    }

    #[test]
    fn nfkc_folds_compatibility() {
        assert_eq!(normalize("\u{fb01}", NormalizationForm::Nfkc), "fi");
        assert_eq!(normalize("\u{fb01}", NormalizationForm::Nfc), "\u{fb01}");
    }

    #[test]
    fn casefold_expands() {
        assert_eq!(casefold("Stra\u{df}e"), "strasse");
        assert_eq!(casefold("ABC"), "abc");
    }

    #[test]
    fn icompare_ignores_case_and_composition() {
        assert_eq!(icompare("STRASSE", "stra\u{df}e"), Ordering::Equal);
        assert_eq!(icompare("Caf\u{e9}", "CAFE\u{301}"), Ordering::Equal);
        assert_eq!(icompare("apple", "Banana"), Ordering::Less);
        assert_eq!(icompare("b", "A"), Ordering::Greater);
    }

    #[test]
    fn case_mapping() {
        assert_eq!(to_upper("f\u{fc}\u{df}ball"), "F\u{dc}SSBALL");
        assert_eq!(to_lower("\u{3a3}\u{39f}\u{3a3}"), "\u{3c3}\u{3bf}\u{3c2}");
        let mut s = String::from("Po\u{e9}sie");
        to_upper_in_place(&mut s);
        assert_eq!(s, "PO\u{c9}SIE");
        to_lower_in_place(&mut s);
        assert_eq!(s, "po\u{e9}sie");
    }
}
