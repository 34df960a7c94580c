// validate_test.rs - Integration tests for validation, repair and counting.

use std::borrow::Cow;

use unitext::distance::{distance, distance_between, distance_unchecked};
use unitext::error::TextError;
use unitext::validate::{
    check, first_invalid, is_valid, repair, repair_in_place, repair_with, strip_bom, validate,
    valid_prefix, UTF8_BOM,
};

/// (text, codepoint count) pairs covering several scripts.
const SAMPLES: &[(&str, usize)] = &[
    ("0123456789", 10),
    ("ABCDEFGHIJ", 10),
    ("\u{648}\u{627}\u{644}\u{62b}\u{639}\u{644}\u{628} \u{627}\u{644}\u{628}\u{646}\u{64a} \u{627}\u{644}\u{633}\u{631}\u{64a}\u{639}.", 21),
    ("\u{431}\u{44a}\u{440}\u{437}\u{43e} \u{43a}\u{430}\u{444}\u{44f}\u{432}\u{43e} \u{43b}\u{438}\u{441}\u{438}\u{446}\u{430}.", 20),
    ("\u{d035} \u{be0c}\u{b77c}\u{c6b4} \u{d3ed}\u{c2a4}", 8),
    ("k\u{f6}lt\u{e9}szet", 9),
    ("\u{8a69}", 1),
];

// === Validation ===

#[test]
fn ascii_is_valid_with_three_codepoints() {
    let buf = b"\x41\x42\x43";
    assert!(is_valid(buf));
    assert_eq!(distance(buf), Ok(3));
    assert!(buf.iter().all(u8::is_ascii));
}

#[test]
fn malformed_sample_is_rejected_at_its_last_byte() {
    let buf = b"\xe6\x97\xa5\xd1\x88\xfa";
    assert!(!is_valid(buf));
    assert_eq!(first_invalid(buf), Some(5));
    assert_eq!(validate(buf), Err(TextError::InvalidSequence { offset: 5 }));
    assert_eq!(distance(buf), Err(TextError::InvalidSequence { offset: 5 }));
}

#[test]
fn sample_lengths() {
    for &(text, count) in SAMPLES {
        assert!(is_valid(text.as_bytes()), "{}", text);
        assert_eq!(distance(text.as_bytes()), Ok(count), "{}", text);
        assert_eq!(distance_unchecked(text), count);
        assert_eq!(validate(text.as_bytes()), Ok(text));
    }
}

#[test]
fn check_returns_valid_prefix() {
    let report = check(b"ok \xf0\x9f\x98");
    assert_eq!(report.valid_prefix, "ok ");
    assert_eq!(report.invalid_at, Some(3));
    assert_eq!(valid_prefix(b"ok"), "ok");
}

#[test]
fn encoded_surrogate_is_invalid() {
    // CESU-style encoding of U+D83D.
    assert_eq!(first_invalid(b"a\xed\xa0\xbd"), Some(1));
}

#[test]
fn overlong_nul_is_invalid() {
    assert_eq!(first_invalid(b"\xc0\x80"), Some(0));
}

// === Distance ===

#[test]
fn distance_between_offsets() {
    let s = "\u{65e5}\u{672c}\u{8a9e}";
    let buf = s.as_bytes();
    assert_eq!(distance_between(buf, 0, 9), Ok(3));
    assert_eq!(distance_between(buf, 3, 9), Ok(2));
    assert_eq!(
        distance_between(buf, 0, 10),
        Err(TextError::InvalidRange { from: 0, to: 10, len: 9 })
    );
}

// === Repair ===

#[test]
fn repair_replaces_each_subpart_once() {
    let buf = b"\xe6\x97\xa5\xd1\x88\xfa";
    assert_eq!(repair(buf), "\u{65e5}\u{448}\u{fffd}");
    assert_eq!(repair_with(buf, '?'), "\u{65e5}\u{448}?");
}

#[test]
fn repair_is_idempotent() {
    let once = repair(b"a\xc3(b\xf0\x28\x8c\xbc").into_owned();
    let twice = repair(once.as_bytes());
    assert!(matches!(twice, Cow::Borrowed(_)));
    assert_eq!(twice, once);
}

#[test]
fn repair_follows_maximal_subpart_practice() {
    // Example from Unicode chapter 3, table 3-8.
    let buf = b"\x61\xf1\x80\x80\xe1\x80\xc2\x62\x80\x63\x80\xbf\x64";
    assert_eq!(
        repair(buf),
        "a\u{fffd}\u{fffd}\u{fffd}b\u{fffd}c\u{fffd}\u{fffd}d"
    );
}

#[test]
fn repair_in_place_rewrites_buffer() {
    let mut buf = b"x\xffy".to_vec();
    assert_eq!(repair_in_place(&mut buf, '\u{fffd}'), 1);
    assert_eq!(buf, "x\u{fffd}y".as_bytes());
}

// === BOM ===

#[test]
fn strip_bom_before_validation() {
    let mut buf = UTF8_BOM.to_vec();
    buf.extend_from_slice("\u{30a1}".as_bytes());
    assert_eq!(validate(strip_bom(&buf)), Ok("\u{30a1}"));
    assert_eq!(distance(&buf), Ok(2));
}
