// error.rs - Error type shared by every fallible operation in unitext.
//
// Each variant carries a stable negative code so callers that still speak
// the "-1 means failure" convention can map results back to integers.

use std::fmt;

pub const ERR_INVALID_SEQUENCE: i32 = -1;
pub const ERR_INVALID_CODEPOINT: i32 = -2;
pub const ERR_BOUNDARY_EXCEEDED: i32 = -3;
pub const ERR_INVALID_RANGE: i32 = -4;
pub const ERR_UNSUPPORTED_ENCODING: i32 = -5;
pub const ERR_UNMAPPABLE: i32 = -6;

/// Error type for decoding, encoding, iteration and conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// The bytes starting at `offset` do not form a well-formed sequence
    /// (bad continuation byte, over-long form, encoded surrogate, value
    /// above U+10FFFF, or a truncated trailing sequence).
    ///
    /// For UTF-16 input the offset counts code units, not bytes.
    InvalidSequence { offset: usize },
    /// An encode request targeted a surrogate or a value above U+10FFFF.
    InvalidCodepoint(u32),
    /// An iteration step asked for more movement than the buffer allows.
    /// `moved` is the number of whole steps completed before the edge.
    BoundaryExceeded { requested: usize, moved: usize },
    /// A byte range was reversed or extended past the end of the buffer.
    InvalidRange { from: usize, to: usize, len: usize },
    /// The charset label is unknown or has no built-in codec.
    UnsupportedEncoding(String),
    /// `code` cannot be represented in the target charset. `offset` is the
    /// position of the character in the decoded input, in characters.
    Unmappable { offset: usize, code: u32 },
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::InvalidSequence { offset } => {
                write!(f, "invalid sequence at offset {}", offset)
            }
            TextError::InvalidCodepoint(code) => write!(f, "invalid code point U+{:04X}", code),
            TextError::BoundaryExceeded { requested, moved } => write!(
                f,
                "boundary exceeded: requested {} steps, moved {}",
                requested, moved
            ),
            TextError::InvalidRange { from, to, len } => {
                write!(f, "invalid range {}..{} for length {}", from, to, len)
            }
            TextError::UnsupportedEncoding(name) => write!(f, "unsupported encoding: {}", name),
            TextError::Unmappable { offset, code } => write!(
                f,
                "U+{:04X} at character {} is not representable in the target encoding",
                code, offset
            ),
        }
    }
}

impl std::error::Error for TextError {}

impl TextError {
    /// Returns the stable integer code for this error.
    pub fn code(&self) -> i32 {
        match self {
            TextError::InvalidSequence { .. } => ERR_INVALID_SEQUENCE,
            TextError::InvalidCodepoint(_) => ERR_INVALID_CODEPOINT,
            TextError::BoundaryExceeded { .. } => ERR_BOUNDARY_EXCEEDED,
            TextError::InvalidRange { .. } => ERR_INVALID_RANGE,
            TextError::UnsupportedEncoding(_) => ERR_UNSUPPORTED_ENCODING,
            TextError::Unmappable { .. } => ERR_UNMAPPABLE,
        }
    }

    /// Byte (or code unit) offset of the failure, when the error has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            TextError::InvalidSequence { offset } => Some(*offset),
            TextError::Unmappable { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_sequence_reports_offset() {
        let err = TextError::InvalidSequence { offset: 5 };
        assert_eq!(err.code(), ERR_INVALID_SEQUENCE);
        assert_eq!(err.offset(), Some(5));
        assert_eq!(err.to_string(), "invalid sequence at offset 5");
    }

    #[test]
    fn invalid_codepoint_display() {
        let err = TextError::InvalidCodepoint(0xD800);
        assert_eq!(err.to_string(), "invalid code point U+D800");
        assert_eq!(err.offset(), None);
    }

    #[test]
    fn boundary_display() {
        let err = TextError::BoundaryExceeded {
            requested: 4,
            moved: 2,
        };
        assert_eq!(err.code(), ERR_BOUNDARY_EXCEEDED);
        assert!(err.to_string().contains("requested 4"));
    }

    #[test]
    fn codes_are_distinct() {
        let errs = [
            TextError::InvalidSequence { offset: 0 },
            TextError::InvalidCodepoint(0),
            TextError::BoundaryExceeded {
                requested: 0,
                moved: 0,
            },
            TextError::InvalidRange {
                from: 0,
                to: 0,
                len: 0,
            },
            TextError::UnsupportedEncoding(String::new()),
            TextError::Unmappable { offset: 0, code: 0 },
        ];
        let mut codes: Vec<i32> = errs.iter().map(TextError::code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errs.len());
        assert!(codes.iter().all(|&c| c < 0));
    }

    #[test]
    fn error_trait() {
        let err: Box<dyn std::error::Error> =
            Box::new(TextError::UnsupportedEncoding("KOI8-U".to_string()));
        assert_eq!(err.to_string(), "unsupported encoding: KOI8-U");
    }
}
