// convert.rs - Conversions between Unicode encoding forms and named charsets.
//
// The UTF-8/16/32 helpers are strict: ill-formed input is an error. The
// TextConverter can instead substitute a default character when configured to.

use log::{debug, warn};

use crate::encodings::{self, charset_for_label, utf16, utf32, Charset};
use crate::error::TextError;
use crate::validate;

// === Encoding Forms ===

/// UTF-8 bytes to UTF-16 code units.
pub fn utf8_to_utf16(buf: &[u8]) -> Result<Vec<u16>, TextError> {
    Ok(validate::validate(buf)?.encode_utf16().collect())
}

/// UTF-8 bytes to UTF-32 code units.
pub fn utf8_to_utf32(buf: &[u8]) -> Result<Vec<u32>, TextError> {
    Ok(validate::validate(buf)?.chars().map(|c| c as u32).collect())
}

/// UTF-16 code units to a string. Error offsets count code units.
pub fn utf16_to_utf8(units: &[u16]) -> Result<String, TextError> {
    let mut out = String::with_capacity(units.len());
    let mut i = 0;
    while i < units.len() {
        let d = utf16::decode(units, i)?;
        out.push(d.code);
        i += d.len;
    }
    Ok(out)
}

/// UTF-16 code units to UTF-32 code units.
pub fn utf16_to_utf32(units: &[u16]) -> Result<Vec<u32>, TextError> {
    let mut out = Vec::with_capacity(units.len());
    let mut i = 0;
    while i < units.len() {
        let d = utf16::decode(units, i)?;
        out.push(d.code as u32);
        i += d.len;
    }
    Ok(out)
}

/// UTF-32 code units to a string. Error offsets count code units.
pub fn utf32_to_utf8(units: &[u32]) -> Result<String, TextError> {
    utf32::validate(units)?;
    Ok(units.iter().filter_map(|&u| char::from_u32(u)).collect())
}

/// UTF-32 code units to UTF-16 code units.
pub fn utf32_to_utf16(units: &[u32]) -> Result<Vec<u16>, TextError> {
    utf32::validate(units)?;
    let mut out = Vec::with_capacity(units.len());
    let mut buf = [0u16; 2];
    for c in units.iter().filter_map(|&u| char::from_u32(u)) {
        out.extend_from_slice(c.encode_utf16(&mut buf));
    }
    Ok(out)
}

/// One codepoint as a UTF-8 string.
pub fn char_to_utf8(code: u32) -> Result<String, TextError> {
    Ok(utf32::decode(code)?.to_string())
}

/// One codepoint as UTF-16 code units.
pub fn char_to_utf16(code: u32) -> Result<Vec<u16>, TextError> {
    let mut buf = [0u16; 2];
    Ok(utf32::decode(code)?.encode_utf16(&mut buf).to_vec())
}

// === Converter Settings ===

/// Per-converter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterSettings {
    /// Label of the input charset.
    pub input: String,
    /// Label of the output charset.
    pub output: String,
    /// Substitute `default_character` for undecodable or unencodable input
    /// instead of failing.
    pub skip_errors: bool,
    pub default_character: char,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        ConverterSettings {
            input: "UTF-8".to_string(),
            output: "UTF-8".to_string(),
            skip_errors: false,
            default_character: '?',
        }
    }
}

/// Builder for [`TextConverter`].
#[derive(Debug, Clone)]
pub struct ConverterBuilder {
    settings: ConverterSettings,
}

impl ConverterBuilder {
    pub fn new(input: &str, output: &str) -> Self {
        ConverterBuilder {
            settings: ConverterSettings {
                input: input.to_string(),
                output: output.to_string(),
                ..ConverterSettings::default()
            },
        }
    }

    pub fn skip_errors(mut self, yes: bool) -> Self {
        self.settings.skip_errors = yes;
        self
    }

    pub fn default_character(mut self, c: char) -> Self {
        self.settings.default_character = c;
        self
    }

    pub fn build(self) -> Result<TextConverter, TextError> {
        TextConverter::with_settings(self.settings)
    }
}

// === TextConverter ===

/// Output of [`TextConverter::convert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    pub bytes: Vec<u8>,
    /// Number of substitutions made. Always 0 unless `skip_errors` is set.
    pub replaced: usize,
}

/// Transcodes bytes between two named charsets through UTF-8.
pub struct TextConverter {
    settings: ConverterSettings,
    input: &'static dyn Charset,
    output: &'static dyn Charset,
}

impl std::fmt::Debug for TextConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextConverter")
            .field("input", &self.input.name())
            .field("output", &self.output.name())
            .field("skip_errors", &self.settings.skip_errors)
            .finish()
    }
}

impl TextConverter {
    /// A strict converter between two charset labels.
    pub fn new(input: &str, output: &str) -> Result<Self, TextError> {
        ConverterBuilder::new(input, output).build()
    }

    pub fn builder(input: &str, output: &str) -> ConverterBuilder {
        ConverterBuilder::new(input, output)
    }

    /// Resolves both labels. Unknown labels report `UnsupportedEncoding`.
    pub fn with_settings(settings: ConverterSettings) -> Result<Self, TextError> {
        let input = charset_for_label(&settings.input)?;
        let output = charset_for_label(&settings.output)?;
        debug!("converter {} -> {}", input.name(), output.name());
        Ok(TextConverter {
            settings,
            input,
            output,
        })
    }

    pub fn settings(&self) -> &ConverterSettings {
        &self.settings
    }

    pub fn input_charset(&self) -> &'static dyn Charset {
        self.input
    }

    pub fn output_charset(&self) -> &'static dyn Charset {
        self.output
    }

    fn replacement(&self) -> Option<char> {
        self.settings
            .skip_errors
            .then_some(self.settings.default_character)
    }

    /// Converts `input`. In strict mode the first problem is returned as an
    /// error; with `skip_errors` each problem is replaced and counted.
    pub fn convert(&self, input: &[u8]) -> Result<Converted, TextError> {
        let replacement = self.replacement();

        let mut text = String::with_capacity(input.len());
        if self.input.name() == self.output.name() {
            // Same charset: pass the bytes through once they decode cleanly.
            match self.input.decode_to(input, None, &mut text) {
                Ok(_) => {
                    return Ok(Converted {
                        bytes: input.to_vec(),
                        replaced: 0,
                    })
                }
                Err(e) if replacement.is_none() => return Err(e),
                Err(_) => text.clear(),
            }
        }

        let replaced = self.input.decode_to(input, replacement, &mut text)?;
        self.encode(&text, replaced)
    }

    /// Encodes `text` in the output charset. The input charset is not
    /// consulted.
    pub fn convert_str(&self, text: &str) -> Result<Converted, TextError> {
        self.encode(text, 0)
    }

    fn encode(&self, text: &str, mut replaced: usize) -> Result<Converted, TextError> {
        let mut bytes = Vec::with_capacity(text.len() * self.output.max_len());
        replaced += self.output.encode_to(text, self.replacement(), &mut bytes)?;
        if replaced > 0 {
            warn!(
                "{} -> {}: replaced {} unconvertible sequence(s) with {:?}",
                self.input.name(),
                self.output.name(),
                replaced,
                self.settings.default_character
            );
        }
        Ok(Converted { bytes, replaced })
    }

    /// One-shot strict conversion.
    pub fn convert_between(input: &[u8], from: &str, to: &str) -> Result<Vec<u8>, TextError> {
        Ok(TextConverter::new(from, to)?.convert(input)?.bytes)
    }

    /// Canonical names of every supported charset.
    pub fn encodings() -> Vec<&'static str> {
        encodings::charsets().iter().map(|c| c.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf16_round_trip() {
        let units = utf8_to_utf16("a\u{10346}".as_bytes()).unwrap();
        assert_eq!(units, vec![0x61, 0xd800, 0xdf46]);
        assert_eq!(utf16_to_utf8(&units).unwrap(), "a\u{10346}");
    }

    #[test]
    fn utf32_helpers() {
        assert_eq!(char_to_utf8(0x30a1).unwrap(), "\u{30a1}");
        assert_eq!(char_to_utf16(0x10346).unwrap(), vec![0xd800, 0xdf46]);
        assert_eq!(
            utf32_to_utf8(&[0x41, 0xd800]),
            Err(TextError::InvalidSequence { offset: 1 })
        );
        assert_eq!(utf16_to_utf32(&[0xd800, 0xdf46]).unwrap(), vec![0x10346]);
        assert_eq!(utf32_to_utf16(&[0x10346]).unwrap(), vec![0xd800, 0xdf46]);
        assert_eq!(char_to_utf8(0x110000), Err(TextError::InvalidCodepoint(0x110000)));
    }

    #[test]
    fn strict_utf8_input() {
        assert_eq!(
            utf8_to_utf32(b"ab\xff"),
            Err(TextError::InvalidSequence { offset: 2 })
        );
    }

    #[test]
    fn converter_latin1() {
        let conv = TextConverter::new("UTF-8", "ISO-8859-1").unwrap();
        let out = conv.convert("caf\u{e9}".as_bytes()).unwrap();
        assert_eq!(out.bytes, b"caf\xe9");
        assert_eq!(out.replaced, 0);
    }

    #[test]
    fn converter_skip_errors() {
        let conv = TextConverter::builder("UTF-8", "US-ASCII")
            .skip_errors(true)
            .default_character('*')
            .build()
            .unwrap();
        let out = conv.convert("na\u{ef}ve \u{65e5}".as_bytes()).unwrap();
        assert_eq!(out.bytes, b"na*ve *");
        assert_eq!(out.replaced, 2);
    }

    #[test]
    fn converter_strict_fails() {
        let conv = TextConverter::new("UTF-8", "US-ASCII").unwrap();
        assert_eq!(
            conv.convert("\u{e9}".as_bytes()),
            Err(TextError::Unmappable {
                offset: 0,
                code: 0xe9
            })
        );
    }

    #[test]
    fn identity_validates() {
        let conv = TextConverter::new("utf8", "UTF-8").unwrap();
        assert_eq!(conv.convert(b"ok").unwrap().bytes, b"ok");
        assert!(conv.convert(b"\xff").is_err());

        let lenient = TextConverter::builder("UTF-8", "UTF-8")
            .skip_errors(true)
            .build()
            .unwrap();
        let out = lenient.convert(b"a\xffb").unwrap();
        assert_eq!(out.bytes, b"a?b");
        assert_eq!(out.replaced, 1);
    }

    #[test]
    fn unknown_label() {
        assert_eq!(
            TextConverter::new("UTF-8", "KOI8-R").unwrap_err(),
            TextError::UnsupportedEncoding("KOI8-R".to_string())
        );
    }

    #[test]
    fn encodings_listed() {
        let names = TextConverter::encodings();
        assert!(names.contains(&"UTF-8"));
        assert!(names.contains(&"windows-1252"));
    }
}
