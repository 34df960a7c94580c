// encodings/latin.rs - Single-byte Latin charsets.
// ISO-8859-1, ISO-8859-15 and windows-1252 share the Latin-1 layout and differ
// only in a few high positions, so each is described as overrides on top of it.

use super::Charset;
use crate::error::TextError;

/// A single-byte charset derived from ISO-8859-1.
pub struct LatinCharset {
    name: &'static str,
    aliases: &'static [&'static str],
    /// (byte, codepoint) pairs that differ from Latin-1.
    overrides: &'static [(u8, u16)],
    /// Bytes with no assigned character.
    holes: &'static [u8],
}

pub static CHARSET_ISO_8859_1: LatinCharset = LatinCharset {
    name: "ISO-8859-1",
    aliases: &["latin1", "l1", "iso885911987", "isoir100", "cp819", "ibm819"],
    overrides: &[],
    holes: &[],
};

pub static CHARSET_ISO_8859_15: LatinCharset = LatinCharset {
    name: "ISO-8859-15",
    aliases: &["latin9", "l9", "iso885915"],
    overrides: &[
        (0xa4, 0x20ac),
        (0xa6, 0x0160),
        (0xa8, 0x0161),
        (0xb4, 0x017d),
        (0xb8, 0x017e),
        (0xbc, 0x0152),
        (0xbd, 0x0153),
        (0xbe, 0x0178),
    ],
    holes: &[],
};

pub static CHARSET_WINDOWS_1252: LatinCharset = LatinCharset {
    name: "windows-1252",
    aliases: &["cp1252", "xcp1252"],
    overrides: &[
        (0x80, 0x20ac),
        (0x82, 0x201a),
        (0x83, 0x0192),
        (0x84, 0x201e),
        (0x85, 0x2026),
        (0x86, 0x2020),
        (0x87, 0x2021),
        (0x88, 0x02c6),
        (0x89, 0x2030),
        (0x8a, 0x0160),
        (0x8b, 0x2039),
        (0x8c, 0x0152),
        (0x8e, 0x017d),
        (0x91, 0x2018),
        (0x92, 0x2019),
        (0x93, 0x201c),
        (0x94, 0x201d),
        (0x95, 0x2022),
        (0x96, 0x2013),
        (0x97, 0x2014),
        (0x98, 0x02dc),
        (0x99, 0x2122),
        (0x9a, 0x0161),
        (0x9b, 0x203a),
        (0x9c, 0x0153),
        (0x9e, 0x017e),
        (0x9f, 0x0178),
    ],
    holes: &[0x81, 0x8d, 0x8f, 0x90, 0x9d],
};

impl LatinCharset {
    /// Maps one byte to its character, if assigned.
    pub fn byte_to_char(&self, b: u8) -> Option<char> {
        if b < 0x80 {
            return Some(b as char);
        }
        if let Some(&(_, code)) = self.overrides.iter().find(|&&(byte, _)| byte == b) {
            return char::from_u32(code as u32);
        }
        if self.holes.contains(&b) {
            return None;
        }
        Some(b as char)
    }

    /// Maps one character to its byte, if representable.
    pub fn char_to_byte(&self, c: char) -> Option<u8> {
        let code = c as u32;
        if code < 0x80 {
            return Some(code as u8);
        }
        if let Some(&(byte, _)) = self.overrides.iter().find(|&&(_, cp)| cp as u32 == code) {
            return Some(byte);
        }
        if code > 0xff {
            return None;
        }
        let b = code as u8;
        let displaced = self.overrides.iter().any(|&(byte, _)| byte == b);
        if displaced || self.holes.contains(&b) {
            None
        } else {
            Some(b)
        }
    }
}

impl Charset for LatinCharset {
    fn name(&self) -> &'static str {
        self.name
    }

    fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    fn decode_to(
        &self,
        input: &[u8],
        replacement: Option<char>,
        out: &mut String,
    ) -> Result<usize, TextError> {
        let mut replaced = 0;
        out.reserve(input.len());
        for (offset, &b) in input.iter().enumerate() {
            match (self.byte_to_char(b), replacement) {
                (Some(c), _) => out.push(c),
                (None, Some(rep)) => {
                    out.push(rep);
                    replaced += 1;
                }
                (None, None) => return Err(TextError::InvalidSequence { offset }),
            }
        }
        Ok(replaced)
    }

    fn encode_to(
        &self,
        input: &str,
        replacement: Option<char>,
        out: &mut Vec<u8>,
    ) -> Result<usize, TextError> {
        let mut replaced = 0;
        out.reserve(input.len());
        for (offset, c) in input.chars().enumerate() {
            if let Some(b) = self.char_to_byte(c) {
                out.push(b);
                continue;
            }
            let rep = replacement.ok_or(TextError::Unmappable {
                offset,
                code: c as u32,
            })?;
            let b = self.char_to_byte(rep).ok_or(TextError::Unmappable {
                offset,
                code: rep as u32,
            })?;
            out.push(b);
            replaced += 1;
        }
        Ok(replaced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_is_identity() {
        for b in 0u8..=255 {
            let c = CHARSET_ISO_8859_1.byte_to_char(b).unwrap();
            assert_eq!(c as u32, b as u32);
            assert_eq!(CHARSET_ISO_8859_1.char_to_byte(c), Some(b));
        }
    }

    #[test]
    fn latin9_euro() {
        assert_eq!(CHARSET_ISO_8859_15.byte_to_char(0xa4), Some('\u{20ac}'));
        assert_eq!(CHARSET_ISO_8859_15.char_to_byte('\u{20ac}'), Some(0xa4));
        // The currency sign was displaced by the euro.
        assert_eq!(CHARSET_ISO_8859_15.char_to_byte('\u{a4}'), None);
        assert_eq!(CHARSET_ISO_8859_15.char_to_byte('\u{e9}'), Some(0xe9));
    }

    #[test]
    fn windows_1252_quotes_and_holes() {
        let mut out = String::new();
        CHARSET_WINDOWS_1252
            .decode_to(b"\x93hi\x94 \x80", None, &mut out)
            .unwrap();
        assert_eq!(out, "\u{201c}hi\u{201d} \u{20ac}");
        assert_eq!(CHARSET_WINDOWS_1252.byte_to_char(0x81), None);

        let mut out = String::new();
        assert_eq!(
            CHARSET_WINDOWS_1252.decode_to(b"a\x81", None, &mut out),
            Err(TextError::InvalidSequence { offset: 1 })
        );
    }

    #[test]
    fn encode_with_replacement() {
        let mut out = Vec::new();
        let n = CHARSET_ISO_8859_1
            .encode_to("caf\u{e9} \u{65e5}", Some('?'), &mut out)
            .unwrap();
        assert_eq!(n, 1);
        assert_eq!(out, b"caf\xe9 ?");
    }

    #[test]
    fn unmappable_replacement_is_reported() {
        let mut out = Vec::new();
        assert_eq!(
            CHARSET_ISO_8859_1.encode_to("\u{65e5}", Some('\u{fffd}'), &mut out),
            Err(TextError::Unmappable {
                offset: 0,
                code: 0xfffd
            })
        );
    }
}
