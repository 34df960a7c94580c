// cursor.rs - Bidirectional codepoint cursors over UTF-8 byte buffers.
//
// A cursor is a (buffer, byte offset) pair. Every successful operation leaves
// the offset on a codepoint boundary; failed operations leave it where it was.

use std::iter::FusedIterator;

use crate::distance;
use crate::encodings::utf8::{self, is_continuation};
use crate::error::TextError;

/// Longest UTF-8 sequence, in bytes.
const MAX_SEQUENCE_LEN: usize = 4;

// === Checked Cursor ===

/// A validating cursor. Malformed input is reported as `InvalidSequence`
/// and the cursor does not move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

#[allow(clippy::should_implement_trait)]
impl<'a> Cursor<'a> {
    /// A cursor at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Cursor { buf, pos: 0 }
    }

    /// A cursor at byte offset `pos`. Fails if `pos` is past the end or
    /// points at a continuation byte.
    pub fn at(buf: &'a [u8], pos: usize) -> Result<Self, TextError> {
        if pos > buf.len() {
            return Err(TextError::InvalidRange {
                from: pos,
                to: pos,
                len: buf.len(),
            });
        }
        if pos < buf.len() && is_continuation(buf[pos]) {
            return Err(TextError::InvalidSequence { offset: pos });
        }
        Ok(Cursor { buf, pos })
    }

    /// A cursor at the end of `buf`.
    pub fn end(buf: &'a [u8]) -> Self {
        Cursor {
            buf,
            pos: buf.len(),
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_at_start(&self) -> bool {
        self.pos == 0
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// The whole underlying buffer.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.buf
    }

    /// The bytes from the cursor to the end of the buffer.
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Decodes the codepoint at the cursor without moving.
    pub fn get(&self) -> Result<Option<char>, TextError> {
        if self.is_at_end() {
            return Ok(None);
        }
        utf8::decode(self.buf, self.pos).map(|d| Some(d.code))
    }

    /// Decodes the codepoint at the cursor and steps past it.
    /// `Ok(None)` at the end of the buffer.
    pub fn next(&mut self) -> Result<Option<char>, TextError> {
        if self.is_at_end() {
            return Ok(None);
        }
        let d = utf8::decode(self.buf, self.pos)?;
        self.pos += d.len;
        Ok(Some(d.code))
    }

    /// Steps back over the preceding codepoint and returns it.
    /// `Ok(None)` at the start of the buffer.
    pub fn prior(&mut self) -> Result<Option<char>, TextError> {
        if self.pos == 0 {
            return Ok(None);
        }
        let mut p = self.pos - 1;
        while p > 0 && is_continuation(self.buf[p]) && self.pos - p < MAX_SEQUENCE_LEN {
            p -= 1;
        }
        let d = utf8::decode(self.buf, p).map_err(|_| TextError::InvalidSequence { offset: p })?;
        if p + d.len != self.pos {
            // The walk back started inside a sequence that does not end here.
            return Err(TextError::InvalidSequence { offset: p });
        }
        self.pos = p;
        Ok(Some(d.code))
    }

    /// Moves `n` codepoints forward (or `-n` back when negative).
    ///
    /// Reaching an edge first reports `BoundaryExceeded` and leaves the
    /// cursor at that edge. Malformed input reports `InvalidSequence` and
    /// restores the position the call started from.
    pub fn advance(&mut self, n: isize) -> Result<(), TextError> {
        let start = self.pos;
        let requested = n.unsigned_abs();
        for moved in 0..requested {
            let step = if n > 0 { self.next() } else { self.prior() };
            match step {
                Ok(Some(_)) => {}
                Ok(None) => return Err(TextError::BoundaryExceeded { requested, moved }),
                Err(e) => {
                    self.pos = start;
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Number of codepoints from this cursor to `other`, which must be over
    /// the same buffer and not before this cursor.
    pub fn distance_to(&self, other: &Cursor<'_>) -> Result<usize, TextError> {
        debug_assert!(std::ptr::eq(self.buf, other.buf));
        distance::distance_between(self.buf, self.pos, other.pos)
    }

    /// Iterates the codepoints from the cursor to the end of the buffer.
    pub fn codepoints(self) -> Codepoints<'a> {
        Codepoints {
            front: self,
            back: Cursor::end(self.buf),
            failed: false,
        }
    }
}

// === Unchecked Cursor ===

/// A cursor over text already known to be well-formed. Structure checks
/// are skipped; buffer-edge checks are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UncheckedCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

#[allow(clippy::should_implement_trait)]
impl<'a> UncheckedCursor<'a> {
    /// A cursor at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        UncheckedCursor {
            buf: text.as_bytes(),
            pos: 0,
        }
    }

    /// A cursor at the start of `buf` without validating it.
    ///
    /// # Safety
    ///
    /// `buf` must be well-formed UTF-8. Walking a malformed buffer may read
    /// out of bounds or produce invalid `char` values.
    pub unsafe fn new_unchecked(buf: &'a [u8]) -> Self {
        UncheckedCursor { buf, pos: 0 }
    }

    /// A cursor at byte offset `pos` of `text`, which must be a char boundary.
    pub fn at(text: &'a str, pos: usize) -> Result<Self, TextError> {
        if pos > text.len() {
            return Err(TextError::InvalidRange {
                from: pos,
                to: pos,
                len: text.len(),
            });
        }
        if !text.is_char_boundary(pos) {
            return Err(TextError::InvalidSequence { offset: pos });
        }
        Ok(UncheckedCursor {
            buf: text.as_bytes(),
            pos,
        })
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_at_start(&self) -> bool {
        self.pos == 0
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.buf
    }

    pub fn get(&self) -> Option<char> {
        if self.is_at_end() {
            return None;
        }
        // SAFETY: construction guarantees well-formed input and pos stays
        // on boundaries.
        Some(unsafe { utf8::decode_unchecked(self.buf, self.pos) }.code)
    }

    pub fn next(&mut self) -> Option<char> {
        if self.is_at_end() {
            return None;
        }
        // SAFETY: as in get().
        let d = unsafe { utf8::decode_unchecked(self.buf, self.pos) };
        self.pos += d.len;
        Some(d.code)
    }

    pub fn prior(&mut self) -> Option<char> {
        if self.pos == 0 {
            return None;
        }
        let mut p = self.pos - 1;
        while p > 0 && is_continuation(self.buf[p]) {
            p -= 1;
        }
        self.pos = p;
        // SAFETY: p is the lead byte of the preceding codepoint.
        Some(unsafe { utf8::decode_unchecked(self.buf, p) }.code)
    }

    /// Moves `n` codepoints, reporting `BoundaryExceeded` (and resting at the
    /// edge) when the buffer runs out first.
    pub fn advance(&mut self, n: isize) -> Result<(), TextError> {
        let requested = n.unsigned_abs();
        for moved in 0..requested {
            let step = if n > 0 { self.next() } else { self.prior() };
            if step.is_none() {
                return Err(TextError::BoundaryExceeded { requested, moved });
            }
        }
        Ok(())
    }

    /// Number of codepoints from this cursor to `other` (same buffer).
    pub fn distance_to(&self, other: &UncheckedCursor<'_>) -> Result<usize, TextError> {
        if other.pos < self.pos || other.pos > self.buf.len() {
            return Err(TextError::InvalidRange {
                from: self.pos,
                to: other.pos,
                len: self.buf.len(),
            });
        }
        Ok(self.buf[self.pos..other.pos]
            .iter()
            .filter(|&&b| !is_continuation(b))
            .count())
    }
}

// === Iterator Adaptor ===

/// Iterator over the codepoints between two checked cursors.
///
/// Yields `Err` once on malformed input and then stops.
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    front: Cursor<'a>,
    back: Cursor<'a>,
    failed: bool,
}

impl<'a> Codepoints<'a> {
    /// Iterates all of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Cursor::new(buf).codepoints()
    }

    /// Byte offset of the next codepoint from the front.
    pub fn offset(&self) -> usize {
        self.front.pos
    }

    fn finish(&mut self, step: Result<Option<char>, TextError>) -> Option<Result<char, TextError>> {
        match step {
            Ok(Some(c)) if self.front.pos <= self.back.pos => Some(Ok(c)),
            Ok(_) => {
                self.failed = true;
                None
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl Iterator for Codepoints<'_> {
    type Item = Result<char, TextError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.front.pos >= self.back.pos {
            return None;
        }
        let step = self.front.next();
        self.finish(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let bytes = self.back.pos.saturating_sub(self.front.pos);
        (bytes.div_ceil(MAX_SEQUENCE_LEN), Some(bytes))
    }
}

impl DoubleEndedIterator for Codepoints<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.failed || self.front.pos >= self.back.pos {
            return None;
        }
        let step = self.back.prior();
        self.finish(step)
    }
}

impl FusedIterator for Codepoints<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prior_are_symmetric() {
        let s = "a\u{10346}\u{65e5}\u{672c}";
        let mut c = Cursor::new(s.as_bytes());
        assert_eq!(c.next(), Ok(Some('a')));
        assert_eq!(c.next(), Ok(Some('\u{10346}')));
        assert_eq!(c.position(), 5);
        assert_eq!(c.prior(), Ok(Some('\u{10346}')));
        assert_eq!(c.position(), 1);
    }

    #[test]
    fn sentinels_do_not_move() {
        let mut c = Cursor::new(b"");
        assert_eq!(c.next(), Ok(None));
        assert_eq!(c.prior(), Ok(None));
        assert_eq!(c.position(), 0);

        let mut c = Cursor::end(b"xy");
        assert_eq!(c.next(), Ok(None));
        assert_eq!(c.position(), 2);
    }

    #[test]
    fn invalid_next_does_not_move() {
        let buf = b"a\xffb";
        let mut c = Cursor::at(buf, 1).unwrap();
        assert_eq!(c.next(), Err(TextError::InvalidSequence { offset: 1 }));
        assert_eq!(c.position(), 1);
    }

    #[test]
    fn prior_over_stray_continuation() {
        let buf = b"a\x80";
        let mut c = Cursor::end(buf);
        assert!(c.prior().is_err());
        assert_eq!(c.position(), 2);
    }

    #[test]
    fn prior_over_truncated_sequence() {
        // E6 97 is a truncated three-byte sequence.
        let buf = b"\xe6\x97";
        let mut c = Cursor::end(buf);
        assert_eq!(c.prior(), Err(TextError::InvalidSequence { offset: 0 }));
        assert_eq!(c.position(), 2);
    }

    #[test]
    fn at_rejects_continuation() {
        let s = "\u{65e5}";
        assert!(Cursor::at(s.as_bytes(), 0).is_ok());
        assert_eq!(
            Cursor::at(s.as_bytes(), 1),
            Err(TextError::InvalidSequence { offset: 1 })
        );
        assert!(Cursor::at(s.as_bytes(), 3).is_ok());
        assert!(matches!(
            Cursor::at(s.as_bytes(), 4),
            Err(TextError::InvalidRange { .. })
        ));
    }

    #[test]
    fn advance_stops_at_edge() {
        let mut c = Cursor::new(b"abc");
        assert_eq!(
            c.advance(5),
            Err(TextError::BoundaryExceeded {
                requested: 5,
                moved: 3
            })
        );
        assert!(c.is_at_end());
        assert_eq!(
            c.advance(-4),
            Err(TextError::BoundaryExceeded {
                requested: 4,
                moved: 3
            })
        );
        assert!(c.is_at_start());
    }

    #[test]
    fn advance_restores_on_invalid() {
        let mut c = Cursor::new(b"ab\xffc");
        assert_eq!(c.advance(3), Err(TextError::InvalidSequence { offset: 2 }));
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn unchecked_cursor_walks_both_ways() {
        let s = "x\u{10346}y";
        let mut c = UncheckedCursor::new(s);
        assert_eq!(c.next(), Some('x'));
        assert_eq!(c.next(), Some('\u{10346}'));
        assert_eq!(c.next(), Some('y'));
        assert_eq!(c.next(), None);
        assert_eq!(c.prior(), Some('y'));
        assert_eq!(c.prior(), Some('\u{10346}'));
        assert_eq!(c.position(), 1);
        let end = UncheckedCursor::at(s, s.len()).unwrap();
        assert_eq!(c.distance_to(&end), Ok(2));
    }

    #[test]
    fn codepoints_fuse_after_error() {
        let mut it = Codepoints::new(b"a\xffb");
        assert_eq!(it.next(), Some(Ok('a')));
        assert_eq!(it.next(), Some(Err(TextError::InvalidSequence { offset: 1 })));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn codepoints_meet_in_the_middle() {
        let mut it = Codepoints::new("ab\u{e9}".as_bytes());
        assert_eq!(it.next_back(), Some(Ok('\u{e9}')));
        assert_eq!(it.next(), Some(Ok('a')));
        assert_eq!(it.next_back(), Some(Ok('b')));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }
}
