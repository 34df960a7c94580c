// distance.rs - Codepoint counting over UTF-8 buffers.
//
// Counting validates: a malformed buffer has no length.

use crate::encodings::utf8::{is_continuation, scan};
use crate::error::TextError;

/// Number of codepoints in `buf`, or the offset of the first invalid sequence.
pub fn distance(buf: &[u8]) -> Result<usize, TextError> {
    count(buf, 0, buf.len())
}

/// Number of codepoints in `buf[from..to]`.
///
/// `from` and `to` must be codepoint boundaries with `from <= to <= len`;
/// a sequence that would cross `to` is reported as invalid.
pub fn distance_between(buf: &[u8], from: usize, to: usize) -> Result<usize, TextError> {
    if from > to || to > buf.len() {
        return Err(TextError::InvalidRange {
            from,
            to,
            len: buf.len(),
        });
    }
    count(&buf[..to], from, to)
}

fn count(buf: &[u8], from: usize, to: usize) -> Result<usize, TextError> {
    let mut n = 0;
    let mut pos = from;
    while pos < to {
        let len = scan(buf, pos).map_err(|_| TextError::InvalidSequence { offset: pos })?;
        pos += len;
        n += 1;
    }
    Ok(n)
}

/// Number of codepoints in text already known to be well-formed.
pub fn distance_unchecked(text: &str) -> usize {
    text.as_bytes().iter().filter(|&&b| !is_continuation(b)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_codepoints() {
        assert_eq!(distance(b"ABC"), Ok(3));
        assert_eq!(distance(b""), Ok(0));
        assert_eq!(distance("\u{65e5}\u{10346}x".as_bytes()), Ok(3));
    }

    #[test]
    fn invalid_has_no_length() {
        assert_eq!(
            distance(b"\xe6\x97\xa5\xd1\x88\xfa"),
            Err(TextError::InvalidSequence { offset: 5 })
        );
    }

    #[test]
    fn between_positions() {
        let buf = "a\u{65e5}bc".as_bytes();
        assert_eq!(distance_between(buf, 0, 4), Ok(2));
        assert_eq!(distance_between(buf, 1, 6), Ok(3));
        assert_eq!(distance_between(buf, 6, 6), Ok(0));
        assert!(distance_between(buf, 2, 4).is_err());
        assert!(matches!(
            distance_between(buf, 3, 1),
            Err(TextError::InvalidRange { .. })
        ));
    }

    #[test]
    fn unchecked_agrees() {
        let s = "\u{648}\u{627}\u{644}\u{62b}";
        assert_eq!(distance_unchecked(s), distance(s.as_bytes()).unwrap());
    }
}
