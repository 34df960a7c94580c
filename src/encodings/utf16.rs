// encodings/utf16.rs - UTF-16 code unit helpers and the UTF-16 charsets.

use super::utf8::Decoded;
use super::{Charset, Endian};
use crate::error::TextError;

#[inline]
pub fn is_high_surrogate(unit: u16) -> bool {
    (0xd800..=0xdbff).contains(&unit)
}

#[inline]
pub fn is_low_surrogate(unit: u16) -> bool {
    (0xdc00..=0xdfff).contains(&unit)
}

#[inline]
pub fn is_surrogate(unit: u16) -> bool {
    (0xd800..=0xdfff).contains(&unit)
}

/// Decodes the codepoint starting at `offset`. `len` in the result counts
/// code units (1 or 2). Unpaired surrogates report `InvalidSequence`.
pub fn decode(units: &[u16], offset: usize) -> Result<Decoded, TextError> {
    let Some(&first) = units.get(offset) else {
        return Err(TextError::BoundaryExceeded {
            requested: 1,
            moved: 0,
        });
    };
    if !is_surrogate(first) {
        // Non-surrogate BMP values are always scalar values.
        let code = char::from_u32(first as u32).ok_or(TextError::InvalidSequence { offset })?;
        return Ok(Decoded { code, len: 1 });
    }
    if is_high_surrogate(first) {
        if let Some(&second) = units.get(offset + 1) {
            if is_low_surrogate(second) {
                let value =
                    0x10000 + (((first as u32 - 0xd800) << 10) | (second as u32 - 0xdc00));
                if let Some(code) = char::from_u32(value) {
                    return Ok(Decoded { code, len: 2 });
                }
            }
        }
    }
    Err(TextError::InvalidSequence { offset })
}

// === UTF-16 Charsets ===

pub struct Utf16Charset {
    name: &'static str,
    aliases: &'static [&'static str],
    /// `None` sniffs a byte order mark and falls back to big-endian.
    endian: Option<Endian>,
}

pub static CHARSET_UTF16: Utf16Charset = Utf16Charset {
    name: "UTF-16",
    aliases: &["ucs2", "unicode"],
    endian: None,
};

pub static CHARSET_UTF16LE: Utf16Charset = Utf16Charset {
    name: "UTF-16LE",
    aliases: &[],
    endian: Some(Endian::Little),
};

pub static CHARSET_UTF16BE: Utf16Charset = Utf16Charset {
    name: "UTF-16BE",
    aliases: &[],
    endian: Some(Endian::Big),
};

/// Byte order announced by a leading UTF-16 byte order mark, if any.
/// The mark is always two bytes.
pub fn sniff_bom(input: &[u8]) -> Option<Endian> {
    match input {
        [0xfe, 0xff, ..] => Some(Endian::Big),
        [0xff, 0xfe, ..] => Some(Endian::Little),
        _ => None,
    }
}

#[inline]
fn read_unit(pair: &[u8], endian: Endian) -> u16 {
    let bytes = [pair[0], pair[1]];
    match endian {
        Endian::Big => u16::from_be_bytes(bytes),
        Endian::Little => u16::from_le_bytes(bytes),
    }
}

#[inline]
fn write_unit(out: &mut Vec<u8>, unit: u16, endian: Endian) {
    match endian {
        Endian::Big => out.extend_from_slice(&unit.to_be_bytes()),
        Endian::Little => out.extend_from_slice(&unit.to_le_bytes()),
    }
}

impl Charset for Utf16Charset {
    fn name(&self) -> &'static str {
        self.name
    }

    fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    fn min_len(&self) -> usize {
        2
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
        let (endian, start) = match self.endian {
            Some(e) => (e, 0),
            None => match sniff_bom(input) {
                Some(e) => (e, 2),
                None => (Endian::Big, 0),
            },
        };
        let body = &input[start..];
        let units: Vec<u16> = body.chunks_exact(2).map(|p| read_unit(p, endian)).collect();

        let mut replaced = 0;
        let mut i = 0;
        while i < units.len() {
            match decode(&units, i) {
                Ok(d) => {
                    out.push(d.code);
                    i += d.len;
                }
                Err(_) => {
                    let rep = replacement.ok_or(TextError::InvalidSequence {
                        offset: start + i * 2,
                    })?;
                    out.push(rep);
                    replaced += 1;
                    i += 1;
                }
            }
        }
        if body.len() % 2 != 0 {
            let rep = replacement.ok_or(TextError::InvalidSequence {
                offset: input.len() - 1,
            })?;
            out.push(rep);
            replaced += 1;
        }
        Ok(replaced)
    }

    fn encode_to(
        &self,
        input: &str,
        _replacement: Option<char>,
        out: &mut Vec<u8>,
    ) -> Result<usize, TextError> {
        let endian = self.endian.unwrap_or(Endian::Big);
        out.reserve(input.len() * 2 + 2);
        if self.endian.is_none() {
            write_unit(out, 0xfeff, endian);
        }
        for unit in input.encode_utf16() {
            write_unit(out, unit, endian);
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrogate_classes() {
        assert!(is_high_surrogate(0xd800));
        assert!(is_low_surrogate(0xdc00));
        assert!(!is_surrogate(0xe000));
    }

    #[test]
    fn decode_pairs() {
        let units: Vec<u16> = "a\u{10346}".encode_utf16().collect();
        assert_eq!(decode(&units, 0).unwrap(), Decoded { code: 'a', len: 1 });
        assert_eq!(
            decode(&units, 1).unwrap(),
            Decoded {
                code: '\u{10346}',
                len: 2
            }
        );
    }

    #[test]
    fn decode_unpaired() {
        assert_eq!(
            decode(&[0x61, 0xd800, 0x62], 1),
            Err(TextError::InvalidSequence { offset: 1 })
        );
        assert_eq!(
            decode(&[0xdc00], 0),
            Err(TextError::InvalidSequence { offset: 0 })
        );
    }

    #[test]
    fn charset_sniffs_bom() {
        let mut out = String::new();
        CHARSET_UTF16
            .decode_to(&[0xff, 0xfe, 0x41, 0x00, 0x42, 0x00], None, &mut out)
            .unwrap();
        assert_eq!(out, "AB");

        let mut out = String::new();
        CHARSET_UTF16.decode_to(&[0x00, 0x41], None, &mut out).unwrap();
        assert_eq!(out, "A");
    }

    #[test]
    fn charset_writes_bom_only_for_unmarked_variant() {
        let mut out = Vec::new();
        CHARSET_UTF16.encode_to("A", None, &mut out).unwrap();
        assert_eq!(out, [0xfe, 0xff, 0x00, 0x41]);

        let mut out = Vec::new();
        CHARSET_UTF16LE.encode_to("A", None, &mut out).unwrap();
        assert_eq!(out, [0x41, 0x00]);
    }

    #[test]
    fn charset_odd_length() {
        let mut out = String::new();
        assert_eq!(
            CHARSET_UTF16BE.decode_to(&[0x00, 0x41, 0x00], None, &mut out),
            Err(TextError::InvalidSequence { offset: 2 })
        );
        let mut out = String::new();
        assert_eq!(
            CHARSET_UTF16BE.decode_to(&[0x00, 0x41, 0x00], Some('?'), &mut out),
            Ok(1)
        );
        assert_eq!(out, "A?");
    }
}
