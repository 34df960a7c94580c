// encodings/utf8.rs - UTF-8 codepoint decoder and encoder.
// Well-formedness follows Unicode Table 3-7 (U+0000 - U+10FFFF, no surrogates).

use smallvec::SmallVec;

use super::Charset;
use crate::error::TextError;

/// Encoded form of one codepoint. Never spills to the heap.
pub type Utf8Bytes = SmallVec<[u8; 4]>;

/// A decoded codepoint and the number of code units (bytes, for UTF-8)
/// it occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub code: char,
    pub len: usize,
}

// === UTF-8 Helpers ===

#[inline]
pub fn is_continuation(b: u8) -> bool {
    (b & 0xc0) == 0x80
}

#[inline]
fn is_lead(b: u8) -> bool {
    (b & 0xc0) != 0x80
}

// === Sequence Length Table ===
// Maps the first byte to its sequence length. 0 marks bytes that can never
// start a well-formed sequence: continuations, C0/C1 and F5..FF.

static UTF8_SEQUENCE_LEN: [u8; 256] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Length of the sequence introduced by `lead`, or 0 if `lead` cannot
/// start a well-formed sequence.
#[inline]
pub fn sequence_len(lead: u8) -> usize {
    UTF8_SEQUENCE_LEN[lead as usize] as usize
}

/// Allowed range for the byte after `lead`. Narrower than 80..BF for the
/// four leads that could otherwise produce over-long forms, surrogates or
/// values above U+10FFFF.
#[inline]
fn second_byte_range(lead: u8) -> (u8, u8) {
    match lead {
        0xe0 => (0xa0, 0xbf),
        0xed => (0x80, 0x9f),
        0xf0 => (0x90, 0xbf),
        0xf4 => (0x80, 0x8f),
        _ => (0x80, 0xbf),
    }
}

/// Checks the sequence at `offset` (which must be in bounds).
///
/// `Ok(len)` for a well-formed sequence. `Err(n)` otherwise, where `n >= 1`
/// is the length of the maximal subpart: the longest prefix that could still
/// have begun a well-formed sequence.
pub(crate) fn scan(buf: &[u8], offset: usize) -> Result<usize, usize> {
    let lead = buf[offset];
    let len = sequence_len(lead);
    match len {
        0 => return Err(1),
        1 => return Ok(1),
        _ => {}
    }

    let (lo, hi) = second_byte_range(lead);
    match buf.get(offset + 1) {
        Some(&b) if (lo..=hi).contains(&b) => {}
        _ => return Err(1),
    }
    for i in 2..len {
        match buf.get(offset + i) {
            Some(&b) if is_continuation(b) => {}
            _ => return Err(i),
        }
    }
    Ok(len)
}

#[inline]
fn assemble(bytes: &[u8]) -> u32 {
    let lead = bytes[0] as u32;
    match bytes.len() {
        1 => lead,
        n => {
            let mut code = lead & ((1u32 << (7 - n)) - 1);
            for &b in &bytes[1..] {
                code = (code << 6) | (b as u32 & 0x3f);
            }
            code
        }
    }
}

// === Decoder ===

/// Decodes the codepoint starting at `offset`.
///
/// An `offset` at or past the end has nothing to decode and reports
/// `BoundaryExceeded`. Malformed or truncated input reports
/// `InvalidSequence` at `offset`. Never reads past `buf`.
pub fn decode(buf: &[u8], offset: usize) -> Result<Decoded, TextError> {
    if offset >= buf.len() {
        return Err(TextError::BoundaryExceeded {
            requested: 1,
            moved: 0,
        });
    }
    let len = scan(buf, offset).map_err(|_| TextError::InvalidSequence { offset })?;
    let value = assemble(&buf[offset..offset + len]);
    // scan() already excluded surrogates and out-of-range values.
    let code = char::from_u32(value).ok_or(TextError::InvalidSequence { offset })?;
    Ok(Decoded { code, len })
}

/// Decodes the codepoint at `offset` without structure or bounds checks.
///
/// # Safety
///
/// `offset` must be a codepoint boundary inside `buf`, and `buf` must be
/// well-formed UTF-8 from `offset` through the end of that codepoint
/// (for example, a buffer that already passed [`crate::validate::validate`]).
pub unsafe fn decode_unchecked(buf: &[u8], offset: usize) -> Decoded {
    let lead = *buf.get_unchecked(offset);
    let len = sequence_len(lead);
    let code = match len {
        2 => ((lead as u32 & 0x1f) << 6) | (*buf.get_unchecked(offset + 1) as u32 & 0x3f),
        3 => {
            ((lead as u32 & 0x0f) << 12)
                | ((*buf.get_unchecked(offset + 1) as u32 & 0x3f) << 6)
                | (*buf.get_unchecked(offset + 2) as u32 & 0x3f)
        }
        4 => {
            ((lead as u32 & 0x07) << 18)
                | ((*buf.get_unchecked(offset + 1) as u32 & 0x3f) << 12)
                | ((*buf.get_unchecked(offset + 2) as u32 & 0x3f) << 6)
                | (*buf.get_unchecked(offset + 3) as u32 & 0x3f)
        }
        _ => lead as u32,
    };
    Decoded {
        code: char::from_u32_unchecked(code),
        len: len.max(1),
    }
}

// === Encoder ===

/// Number of bytes `code` needs, or `InvalidCodepoint`.
pub fn encoded_len(code: u32) -> Result<usize, TextError> {
    if (code & 0xffff_ff80) == 0 {
        Ok(1)
    } else if (code & 0xffff_f800) == 0 {
        Ok(2)
    } else if (code & 0xffff_0000) == 0 {
        if (0xd800..=0xdfff).contains(&code) {
            Err(TextError::InvalidCodepoint(code))
        } else {
            Ok(3)
        }
    } else if code <= 0x10_ffff {
        Ok(4)
    } else {
        Err(TextError::InvalidCodepoint(code))
    }
}

/// Writes the encoding of `code` into `buf` and returns how many bytes
/// were used. `buf` is untouched on error.
pub fn encode_into(code: u32, buf: &mut [u8; 4]) -> Result<usize, TextError> {
    let len = encoded_len(code)?;
    match len {
        1 => buf[0] = code as u8,
        2 => {
            buf[0] = ((code >> 6) & 0x1f) as u8 | 0xc0;
            buf[1] = (code & 0x3f) as u8 | 0x80;
        }
        3 => {
            buf[0] = ((code >> 12) & 0x0f) as u8 | 0xe0;
            buf[1] = ((code >> 6) & 0x3f) as u8 | 0x80;
            buf[2] = (code & 0x3f) as u8 | 0x80;
        }
        _ => {
            buf[0] = ((code >> 18) & 0x07) as u8 | 0xf0;
            buf[1] = ((code >> 12) & 0x3f) as u8 | 0x80;
            buf[2] = ((code >> 6) & 0x3f) as u8 | 0x80;
            buf[3] = (code & 0x3f) as u8 | 0x80;
        }
    }
    Ok(len)
}

/// Encodes `code` as 1-4 bytes. Surrogates and values above U+10FFFF
/// are rejected, never substituted.
pub fn encode(code: u32) -> Result<Utf8Bytes, TextError> {
    let mut buf = [0u8; 4];
    let len = encode_into(code, &mut buf)?;
    Ok(SmallVec::from_slice(&buf[..len]))
}

/// Appends one codepoint to `out`.
pub fn append(out: &mut String, code: u32) -> Result<(), TextError> {
    let c = char::from_u32(code).ok_or(TextError::InvalidCodepoint(code))?;
    out.push(c);
    Ok(())
}

/// Appends every codepoint in `codes`. If any is invalid, `out` is left
/// exactly as it was.
pub fn append_all(out: &mut String, codes: &[u32]) -> Result<(), TextError> {
    let mut extra = 0;
    for &code in codes {
        extra += encoded_len(code)?;
    }
    out.reserve(extra);
    for &code in codes {
        // Every value was checked above.
        if let Some(c) = char::from_u32(code) {
            out.push(c);
        }
    }
    Ok(())
}

/// Moves `pos` back to the first byte of the sequence containing it.
/// Positions at or past the end clamp to `buf.len()`.
pub fn left_adjust_char_head(buf: &[u8], pos: usize) -> usize {
    if pos >= buf.len() {
        return buf.len();
    }
    let mut p = pos;
    while p > 0 && !is_lead(buf[p]) {
        p -= 1;
    }
    p
}

// === UTF-8 Charset ===

pub struct Utf8Charset;

pub static CHARSET_UTF8: Utf8Charset = Utf8Charset;

impl Charset for Utf8Charset {
    fn name(&self) -> &'static str {
        "UTF-8"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["utf8", "unicode11utf8"]
    }

    fn max_len(&self) -> usize {
        4
    }

    fn decode_to(
        &self,
        input: &[u8],
        replacement: Option<char>,
        out: &mut String,
    ) -> Result<usize, TextError> {
        let mut replaced = 0;
        let mut pos = 0;
        while pos < input.len() {
            let start = pos;
            while pos < input.len() {
                match scan(input, pos) {
                    Ok(n) => pos += n,
                    Err(_) => break,
                }
            }
            // input[start..pos] was just scanned as well-formed.
            if let Ok(s) = std::str::from_utf8(&input[start..pos]) {
                out.push_str(s);
            }
            if pos < input.len() {
                let Some(rep) = replacement else {
                    return Err(TextError::InvalidSequence { offset: pos });
                };
                if let Err(n) = scan(input, pos) {
                    pos += n;
                }
                out.push(rep);
                replaced += 1;
            }
        }
        Ok(replaced)
    }

    fn encode_to(
        &self,
        input: &str,
        _replacement: Option<char>,
        out: &mut Vec<u8>,
    ) -> Result<usize, TextError> {
        out.extend_from_slice(input.as_bytes());
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_len_table() {
        assert_eq!(sequence_len(b'A'), 1);
        assert_eq!(sequence_len(0x80), 0);
        assert_eq!(sequence_len(0xc0), 0);
        assert_eq!(sequence_len(0xc1), 0);
        assert_eq!(sequence_len(0xc2), 2);
        assert_eq!(sequence_len(0xe0), 3);
        assert_eq!(sequence_len(0xf4), 4);
        assert_eq!(sequence_len(0xf5), 0);
        assert_eq!(sequence_len(0xff), 0);
    }

    #[test]
    fn decode_each_width() {
        assert_eq!(
            decode(b"A", 0).unwrap(),
            Decoded { code: 'A', len: 1 }
        );
        assert_eq!(decode("é".as_bytes(), 0).unwrap().len, 2);
        assert_eq!(decode("日".as_bytes(), 0).unwrap().code, '日');
        let d = decode(&[0xf0, 0x90, 0x8d, 0x86], 0).unwrap();
        assert_eq!(d.code as u32, 0x10346);
        assert_eq!(d.len, 4);
    }

    #[test]
    fn decode_rejects_overlong() {
        assert!(decode(&[0xc0, 0xaf], 0).is_err());
        assert!(decode(&[0xe0, 0x80, 0xaf], 0).is_err());
        assert!(decode(&[0xf0, 0x80, 0x80, 0xaf], 0).is_err());
    }

    #[test]
    fn decode_rejects_surrogates_and_out_of_range() {
        assert_eq!(
            decode(&[0xed, 0xa0, 0x80], 0),
            Err(TextError::InvalidSequence { offset: 0 })
        );
        assert!(decode(&[0xf4, 0x90, 0x80, 0x80], 0).is_err());
        assert!(decode(&[0xf5, 0x80, 0x80, 0x80], 0).is_err());
    }

    #[test]
    fn decode_truncated() {
        let buf = [b'a', 0xe6, 0x97];
        assert_eq!(decode(&buf, 1), Err(TextError::InvalidSequence { offset: 1 }));
    }

    #[test]
    fn decode_past_end() {
        assert_eq!(
            decode(b"ab", 2),
            Err(TextError::BoundaryExceeded {
                requested: 1,
                moved: 0
            })
        );
    }

    #[test]
    fn scan_maximal_subparts() {
        // E1 80 followed by ASCII: the two-byte prefix is one subpart.
        assert_eq!(scan(&[0xe1, 0x80, 0x41], 0), Err(2));
        // F0 80: 80 is outside F0's second-byte range.
        assert_eq!(scan(&[0xf0, 0x80, 0x80], 0), Err(1));
        assert_eq!(scan(&[0xf1, 0x80, 0x80], 0), Err(3));
        assert_eq!(scan(&[0xf1, 0x80, 0x80, 0x80], 0), Ok(4));
    }

    #[test]
    fn unchecked_matches_checked() {
        let s = "a\u{e9}\u{65e5}\u{10346}";
        let buf = s.as_bytes();
        let mut pos = 0;
        while pos < buf.len() {
            let checked = decode(buf, pos).unwrap();
            let unchecked = unsafe { decode_unchecked(buf, pos) };
            assert_eq!(checked, unchecked);
            pos += checked.len;
        }
    }

    #[test]
    fn encode_widths() {
        assert_eq!(encode(0x41).unwrap().as_slice(), b"A");
        assert_eq!(encode(0xe9).unwrap().as_slice(), "é".as_bytes());
        assert_eq!(encode(0x30a1).unwrap().as_slice(), "\u{30a1}".as_bytes());
        assert_eq!(
            encode(0x10346).unwrap().as_slice(),
            &[0xf0, 0x90, 0x8d, 0x86]
        );
    }

    #[test]
    fn encode_rejects_invalid() {
        assert_eq!(encode(0xd800), Err(TextError::InvalidCodepoint(0xd800)));
        assert_eq!(encode(0xdfff), Err(TextError::InvalidCodepoint(0xdfff)));
        assert_eq!(
            encode(0x11_0000),
            Err(TextError::InvalidCodepoint(0x11_0000))
        );
    }

    #[test]
    fn append_all_is_atomic() {
        let mut s = String::from("ab");
        assert!(append_all(&mut s, &[0x63, 0xd800, 0x64]).is_err());
        assert_eq!(s, "ab");
        append_all(&mut s, &[0x63, 0x10346]).unwrap();
        assert_eq!(s, "abc\u{10346}");
    }

    #[test]
    fn left_adjust() {
        let buf = "a\u{65e5}b".as_bytes();
        assert_eq!(left_adjust_char_head(buf, 0), 0);
        assert_eq!(left_adjust_char_head(buf, 2), 1);
        assert_eq!(left_adjust_char_head(buf, 3), 1);
        assert_eq!(left_adjust_char_head(buf, 4), 4);
        assert_eq!(left_adjust_char_head(buf, 99), buf.len());
    }

    #[test]
    fn charset_repairs_with_replacement() {
        let mut out = String::new();
        let n = CHARSET_UTF8
            .decode_to(b"a\xffb\xe6\x97", Some('?'), &mut out)
            .unwrap();
        assert_eq!(out, "a?b?");
        assert_eq!(n, 2);

        let mut out = String::new();
        assert_eq!(
            CHARSET_UTF8.decode_to(b"a\xffb", None, &mut out),
            Err(TextError::InvalidSequence { offset: 1 })
        );
    }
}
