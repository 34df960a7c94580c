// encodings/utf32.rs - UTF-32 code unit helpers and the UTF-32 charsets.

use super::{Charset, Endian};
use crate::error::TextError;

/// Converts one UTF-32 code unit to a scalar value.
#[inline]
pub fn decode(unit: u32) -> Result<char, TextError> {
    char::from_u32(unit).ok_or(TextError::InvalidCodepoint(unit))
}

/// Checks that every unit is a scalar value. The error carries the index of
/// the first bad unit.
pub fn validate(units: &[u32]) -> Result<(), TextError> {
    match units.iter().position(|&u| char::from_u32(u).is_none()) {
        Some(offset) => Err(TextError::InvalidSequence { offset }),
        None => Ok(()),
    }
}

// === UTF-32 Charsets ===

pub struct Utf32Charset {
    name: &'static str,
    aliases: &'static [&'static str],
    /// `None` sniffs a byte order mark and falls back to big-endian.
    endian: Option<Endian>,
}

pub static CHARSET_UTF32: Utf32Charset = Utf32Charset {
    name: "UTF-32",
    aliases: &["ucs4"],
    endian: None,
};

pub static CHARSET_UTF32LE: Utf32Charset = Utf32Charset {
    name: "UTF-32LE",
    aliases: &[],
    endian: Some(Endian::Little),
};

pub static CHARSET_UTF32BE: Utf32Charset = Utf32Charset {
    name: "UTF-32BE",
    aliases: &[],
    endian: Some(Endian::Big),
};

/// Byte order announced by a leading UTF-32 byte order mark, if any.
/// The mark is always four bytes.
pub fn sniff_bom(input: &[u8]) -> Option<Endian> {
    match input {
        [0x00, 0x00, 0xfe, 0xff, ..] => Some(Endian::Big),
        [0xff, 0xfe, 0x00, 0x00, ..] => Some(Endian::Little),
        _ => None,
    }
}

#[inline]
fn read_unit(quad: &[u8], endian: Endian) -> u32 {
    let bytes = [quad[0], quad[1], quad[2], quad[3]];
    match endian {
        Endian::Big => u32::from_be_bytes(bytes),
        Endian::Little => u32::from_le_bytes(bytes),
    }
}

impl Charset for Utf32Charset {
    fn name(&self) -> &'static str {
        self.name
    }

    fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    fn min_len(&self) -> usize {
        4
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
                Some(e) => (e, 4),
                None => (Endian::Big, 0),
            },
        };
        let body = &input[start..];
        let mut replaced = 0;
        for (i, quad) in body.chunks(4).enumerate() {
            let unit = if quad.len() == 4 {
                char::from_u32(read_unit(quad, endian))
            } else {
                None
            };
            match (unit, replacement) {
                (Some(c), _) => out.push(c),
                (None, Some(rep)) => {
                    out.push(rep);
                    replaced += 1;
                }
                (None, None) => {
                    return Err(TextError::InvalidSequence {
                        offset: start + i * 4,
                    })
                }
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
        let endian = self.endian.unwrap_or(Endian::Big);
        out.reserve(input.len() * 4 + 4);
        let units = self.endian.is_none().then_some(0xfeff).into_iter();
        for unit in units.chain(input.chars().map(|c| c as u32)) {
            match endian {
                Endian::Big => out.extend_from_slice(&unit.to_be_bytes()),
                Endian::Little => out.extend_from_slice(&unit.to_le_bytes()),
            }
        }
        Ok(0)
    }
}
