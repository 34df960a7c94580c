// encodings/ascii.rs - US-ASCII charset (7-bit, bytes 0x00 - 0x7F).

use super::Charset;
use crate::error::TextError;

pub struct AsciiCharset;

pub static CHARSET_ASCII: AsciiCharset = AsciiCharset;

impl Charset for AsciiCharset {
    fn name(&self) -> &'static str {
        "US-ASCII"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["ascii", "iso646us", "us", "ansix3.41968", "cp367"]
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
            if b.is_ascii() {
                out.push(b as char);
            } else if let Some(rep) = replacement {
                out.push(rep);
                replaced += 1;
            } else {
                return Err(TextError::InvalidSequence { offset });
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
            if c.is_ascii() {
                out.push(c as u8);
                continue;
            }
            match replacement {
                Some(rep) if rep.is_ascii() => {
                    out.push(rep as u8);
                    replaced += 1;
                }
                Some(rep) => {
                    return Err(TextError::Unmappable {
                        offset,
                        code: rep as u32,
                    })
                }
                None => {
                    return Err(TextError::Unmappable {
                        offset,
                        code: c as u32,
                    })
                }
            }
        }
        Ok(replaced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_ascii() {
        let mut out = String::new();
        assert_eq!(CHARSET_ASCII.decode_to(b"ABC", None, &mut out), Ok(0));
        assert_eq!(out, "ABC");
    }

    #[test]
    fn decode_high_byte() {
        let mut out = String::new();
        assert_eq!(
            CHARSET_ASCII.decode_to(b"A\xe9", None, &mut out),
            Err(TextError::InvalidSequence { offset: 1 })
        );
        let mut out = String::new();
        assert_eq!(CHARSET_ASCII.decode_to(b"A\xe9", Some('?'), &mut out), Ok(1));
        assert_eq!(out, "A?");
    }

    #[test]
    fn encode_unmappable() {
        let mut out = Vec::new();
        assert_eq!(
            CHARSET_ASCII.encode_to("na\u{ef}ve", None, &mut out),
            Err(TextError::Unmappable {
                offset: 2,
                code: 0xef
            })
        );
        let mut out = Vec::new();
        assert_eq!(CHARSET_ASCII.encode_to("na\u{ef}ve", Some('?'), &mut out), Ok(1));
        assert_eq!(out, b"na?ve");
    }
}
