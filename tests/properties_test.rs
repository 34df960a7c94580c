// properties_test.rs - Randomized properties of the codec, cursors and
// validator, checked against the standard library.

use quickcheck::{QuickCheck, TestResult};
use quickcheck_macros::quickcheck;

use unitext::cursor::{Codepoints, Cursor, UncheckedCursor};
use unitext::distance::distance;
use unitext::encodings::utf8::{decode, encode};
use unitext::error::TextError;
use unitext::validate::{first_invalid, repair, validate};

#[test]
fn encode_then_decode_returns_the_scalar() {
    fn prop(code: u32) -> TestResult {
        let code = code % 0x11_0000;
        let Some(c) = char::from_u32(code) else {
            return TestResult::from_bool(encode(code) == Err(TextError::InvalidCodepoint(code)));
        };
        let Ok(bytes) = encode(code) else {
            return TestResult::failed();
        };
        let d = decode(&bytes, 0);
        TestResult::from_bool(d.map(|d| (d.code, d.len)) == Ok((c, c.len_utf8())))
    }

    QuickCheck::new()
        .tests(2000)
        .quickcheck(prop as fn(u32) -> TestResult);
}

#[quickcheck]
fn counts_agree(text: String) -> bool {
    let buf = text.as_bytes();
    let mut cursor = Cursor::new(buf);
    let mut steps = 0;
    while let Ok(Some(_)) = cursor.next() {
        steps += 1;
    }
    let expected = text.chars().count();
    distance(buf) == Ok(expected)
        && steps == expected
        && UncheckedCursor::new(&text).distance_to(&UncheckedCursor::at(&text, text.len()).unwrap())
            == Ok(expected)
}

#[quickcheck]
fn prior_mirrors_next(text: String) -> bool {
    let buf = text.as_bytes();
    let mut cursor = Cursor::end(buf);
    let mut backwards = Vec::new();
    while let Ok(Some(c)) = cursor.prior() {
        backwards.push(c);
    }
    backwards.reverse();
    cursor.is_at_start() && backwards == text.chars().collect::<Vec<_>>()
}

#[quickcheck]
fn next_then_prior_returns_to_start(text: String, pick: usize) -> TestResult {
    if text.is_empty() {
        return TestResult::discard();
    }
    let boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    let pos = boundaries[pick % boundaries.len()];
    let Ok(mut cursor) = Cursor::at(text.as_bytes(), pos) else {
        return TestResult::failed();
    };
    let forward = cursor.next();
    let back = cursor.prior();
    TestResult::from_bool(forward == back && cursor.position() == pos)
}

#[quickcheck]
fn codepoints_match_chars(text: String) -> bool {
    let forward: Result<Vec<char>, _> = Codepoints::new(text.as_bytes()).collect();
    let backward: Result<Vec<char>, _> = Codepoints::new(text.as_bytes()).rev().collect();
    forward == Ok(text.chars().collect())
        && backward == Ok(text.chars().rev().collect())
}

#[quickcheck]
fn validator_agrees_with_std(bytes: Vec<u8>) -> bool {
    match std::str::from_utf8(&bytes) {
        Ok(s) => validate(&bytes) == Ok(s) && first_invalid(&bytes).is_none(),
        Err(e) => first_invalid(&bytes) == Some(e.valid_up_to()),
    }
}

#[quickcheck]
fn repair_matches_lossy_conversion(bytes: Vec<u8>) -> bool {
    repair(&bytes) == String::from_utf8_lossy(&bytes)
}

#[quickcheck]
fn repair_is_idempotent(bytes: Vec<u8>) -> bool {
    let once = repair(&bytes).into_owned();
    repair(once.as_bytes()) == once
}
