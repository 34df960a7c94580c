// encodings/mod.rs - Charset registry
// One module per encoding family. Every charset decodes into and encodes
// from UTF-8 text, which is the pivot for all transcoding.

pub mod ascii;
pub mod latin;
pub mod utf16;
pub mod utf32;
pub mod utf8;

pub use ascii::CHARSET_ASCII;
pub use latin::{CHARSET_ISO_8859_1, CHARSET_ISO_8859_15, CHARSET_WINDOWS_1252};
pub use utf16::{CHARSET_UTF16, CHARSET_UTF16BE, CHARSET_UTF16LE};
pub use utf32::{CHARSET_UTF32, CHARSET_UTF32BE, CHARSET_UTF32LE};
pub use utf8::CHARSET_UTF8;

use crate::error::TextError;

/// Byte order of a multi-byte code unit encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

/// A named character encoding.
///
/// `replacement` selects the error policy for both directions: `None` makes
/// the first problem an error, `Some(c)` substitutes `c` and counts it.
/// Both methods return the number of substitutions made.
pub trait Charset: Sync {
    /// Canonical (IANA preferred) name.
    fn name(&self) -> &'static str;

    /// Additional labels, already in normalized form (see [`normalize_label`]).
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Minimum bytes per character.
    fn min_len(&self) -> usize {
        1
    }

    /// Maximum bytes per character.
    fn max_len(&self) -> usize {
        1
    }

    /// Decodes `input`, appending the text to `out`.
    ///
    /// Errors report `InvalidSequence` with a byte offset into `input`.
    fn decode_to(
        &self,
        input: &[u8],
        replacement: Option<char>,
        out: &mut String,
    ) -> Result<usize, TextError>;

    /// Encodes `input`, appending the bytes to `out`.
    ///
    /// Errors report `Unmappable` with the character index in `input`. A
    /// replacement that is itself unmappable is also reported as `Unmappable`.
    fn encode_to(
        &self,
        input: &str,
        replacement: Option<char>,
        out: &mut Vec<u8>,
    ) -> Result<usize, TextError>;
}

impl std::fmt::Debug for dyn Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// === Registry ===

static CHARSETS: [&dyn Charset; 11] = [
    &CHARSET_ASCII,
    &CHARSET_UTF8,
    &CHARSET_UTF16,
    &CHARSET_UTF16LE,
    &CHARSET_UTF16BE,
    &CHARSET_UTF32,
    &CHARSET_UTF32LE,
    &CHARSET_UTF32BE,
    &CHARSET_ISO_8859_1,
    &CHARSET_ISO_8859_15,
    &CHARSET_WINDOWS_1252,
];

/// Every built-in charset.
pub fn charsets() -> &'static [&'static dyn Charset] {
    &CHARSETS
}

/// Normalizes a charset label: strips spaces, hyphens and underscores,
/// and lowercases ASCII letters.
pub fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Looks up a built-in charset by name or alias.
pub fn charset_for_label(label: &str) -> Result<&'static dyn Charset, TextError> {
    let key = normalize_label(label.trim());
    CHARSETS
        .iter()
        .copied()
        .find(|cs| normalize_label(cs.name()) == key || cs.aliases().contains(&key.as_str()))
        .ok_or_else(|| TextError::UnsupportedEncoding(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_normalization() {
        assert_eq!(normalize_label("UTF-8"), "utf8");
        assert_eq!(normalize_label("ISO_8859-1"), "iso88591");
        assert_eq!(normalize_label("Windows 1252"), "windows1252");
    }

    #[test]
    fn lookup_by_name_and_alias() {
        assert_eq!(charset_for_label("utf8").unwrap().name(), "UTF-8");
        assert_eq!(charset_for_label("Latin1").unwrap().name(), "ISO-8859-1");
        assert_eq!(charset_for_label("cp1252").unwrap().name(), "windows-1252");
        assert_eq!(charset_for_label(" ascii ").unwrap().name(), "US-ASCII");
        assert_eq!(charset_for_label("utf_16le").unwrap().name(), "UTF-16LE");
    }

    #[test]
    fn unknown_label() {
        assert_eq!(
            charset_for_label("ISO-8859-2").unwrap_err(),
            TextError::UnsupportedEncoding("ISO-8859-2".to_string())
        );
    }

    #[test]
    fn registry_names_are_unique() {
        let mut names: Vec<String> = charsets().iter().map(|c| normalize_label(c.name())).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), charsets().len());
    }
}
