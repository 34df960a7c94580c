// validate.rs - Whole-buffer UTF-8 validation, repair and BOM helpers.

use std::borrow::Cow;

use log::debug;

use crate::encodings::utf8::scan;
use crate::error::TextError;

/// The UTF-8 encoding of U+FEFF.
pub const UTF8_BOM: [u8; 3] = [0xef, 0xbb, 0xbf];

/// Default replacement used by [`repair`].
pub const REPLACEMENT_CHARACTER: char = '\u{fffd}';

/// Offset of the first byte not covered by a well-formed prefix of `buf[from..]`.
fn valid_up_to(buf: &[u8], from: usize) -> usize {
    let mut pos = from;
    while pos < buf.len() {
        match scan(buf, pos) {
            Ok(n) => pos += n,
            Err(_) => break,
        }
    }
    pos
}

// === Validation ===

/// Outcome of [`check`]: the longest well-formed prefix, and where it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation<'a> {
    pub valid_prefix: &'a str,
    /// Byte offset of the first invalid sequence, `None` if the whole
    /// buffer is well-formed.
    pub invalid_at: Option<usize>,
}

impl Validation<'_> {
    pub fn is_valid(&self) -> bool {
        self.invalid_at.is_none()
    }
}

/// Scans `buf` once and reports the valid prefix and first failure.
pub fn check(buf: &[u8]) -> Validation<'_> {
    let end = valid_up_to(buf, 0);
    // SAFETY: buf[..end] was just scanned as well-formed UTF-8.
    let valid_prefix = unsafe { std::str::from_utf8_unchecked(&buf[..end]) };
    Validation {
        valid_prefix,
        invalid_at: (end < buf.len()).then_some(end),
    }
}

/// Returns `buf` as `&str` if the whole buffer is well-formed, otherwise
/// the offset of the first invalid sequence.
pub fn validate(buf: &[u8]) -> Result<&str, TextError> {
    let report = check(buf);
    match report.invalid_at {
        None => Ok(report.valid_prefix),
        Some(offset) => Err(TextError::InvalidSequence { offset }),
    }
}

pub fn is_valid(buf: &[u8]) -> bool {
    valid_up_to(buf, 0) == buf.len()
}

/// Offset of the first invalid sequence, if any.
pub fn first_invalid(buf: &[u8]) -> Option<usize> {
    check(buf).invalid_at
}

/// The longest well-formed prefix of `buf`.
pub fn valid_prefix(buf: &[u8]) -> &str {
    check(buf).valid_prefix
}

/// Validates `buf[from..to]` as a standalone sequence. A codepoint that
/// straddles `to` counts as truncated. Offsets in errors are relative to `buf`.
pub fn validate_range(buf: &[u8], from: usize, to: usize) -> Result<(), TextError> {
    if from > to || to > buf.len() {
        return Err(TextError::InvalidRange {
            from,
            to,
            len: buf.len(),
        });
    }
    let region = &buf[..to];
    let end = valid_up_to(region, from);
    if end < to {
        return Err(TextError::InvalidSequence { offset: end });
    }
    Ok(())
}

// === Repair ===

/// Replaces every maximal invalid subpart with U+FFFD.
pub fn repair(buf: &[u8]) -> Cow<'_, str> {
    repair_with(buf, REPLACEMENT_CHARACTER)
}

/// Replaces every maximal invalid subpart with `replacement`.
///
/// Returns the input borrowed when it is already well-formed, so repairing
/// twice is the same as repairing once.
pub fn repair_with(buf: &[u8], replacement: char) -> Cow<'_, str> {
    repair_counted(buf, replacement).0
}

/// Repairs `buf` in place and returns the number of replacements.
pub fn repair_in_place(buf: &mut Vec<u8>, replacement: char) -> usize {
    let (repaired, count) = match repair_counted(buf, replacement) {
        (Cow::Borrowed(_), _) => return 0,
        (Cow::Owned(s), count) => (s, count),
    };
    *buf = repaired.into_bytes();
    count
}

fn repair_counted(buf: &[u8], replacement: char) -> (Cow<'_, str>, usize) {
    let first = valid_up_to(buf, 0);
    if first == buf.len() {
        // SAFETY: the whole buffer was scanned as well-formed.
        return (Cow::Borrowed(unsafe { std::str::from_utf8_unchecked(buf) }), 0);
    }

    let mut out = String::with_capacity(buf.len() + 3);
    let mut replaced = 0;
    let mut pos = 0;
    let mut end = first;
    loop {
        // SAFETY: buf[pos..end] was scanned as well-formed.
        out.push_str(unsafe { std::str::from_utf8_unchecked(&buf[pos..end]) });
        if end == buf.len() {
            break;
        }
        let skip = scan(buf, end).err().unwrap_or(1);
        out.push(replacement);
        replaced += 1;
        pos = end + skip;
        end = valid_up_to(buf, pos);
    }
    debug!("repaired {} invalid subpart(s) in {} bytes", replaced, buf.len());
    (Cow::Owned(out), replaced)
}

// === Byte Order Mark ===

pub fn starts_with_bom(buf: &[u8]) -> bool {
    buf.starts_with(&UTF8_BOM)
}

/// `buf` without a leading UTF-8 byte order mark.
pub fn strip_bom(buf: &[u8]) -> &[u8] {
    buf.strip_prefix(&UTF8_BOM[..]).unwrap_or(buf)
}
