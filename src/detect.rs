// detect.rs - Charset detection.
//
// CharsetDetector is the boundary for detectors. BasicDetector is a
// rule-based implementation covering byte order marks, UTF-8, UTF-16/32
// zero-byte patterns and the Latin-1 family. It has no statistical model.

use log::debug;

use crate::encodings::{latin, utf16, utf32, Endian};
use crate::validate::{self, UTF8_BOM};

/// One detection guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetMatch {
    /// Canonical charset name, usable with `TextConverter`.
    pub name: String,
    /// Language guess, when the detector makes one.
    pub language: Option<String>,
    /// 0 (no confidence) to 100 (certain).
    pub confidence: u8,
}

impl CharsetMatch {
    fn new(name: &str, confidence: u8) -> Self {
        CharsetMatch {
            name: name.to_string(),
            language: None,
            confidence,
        }
    }
}

/// Guesses the charset of raw bytes.
pub trait CharsetDetector {
    /// All guesses, best first.
    fn detect(&self, bytes: &[u8]) -> Vec<CharsetMatch>;

    /// The best guess, if any.
    fn detect_best(&self, bytes: &[u8]) -> Option<CharsetMatch> {
        self.detect(bytes).into_iter().next()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BasicDetector;

impl BasicDetector {
    pub fn new() -> Self {
        BasicDetector
    }
}

fn bom_match(bytes: &[u8]) -> Option<CharsetMatch> {
    if bytes.starts_with(&UTF8_BOM) {
        return Some(CharsetMatch::new("UTF-8", 100));
    }
    // The UTF-32LE mark begins with the UTF-16LE one, so test it first.
    match utf32::sniff_bom(bytes) {
        Some(Endian::Big) => return Some(CharsetMatch::new("UTF-32BE", 100)),
        Some(Endian::Little) => return Some(CharsetMatch::new("UTF-32LE", 100)),
        None => {}
    }
    match utf16::sniff_bom(bytes) {
        Some(Endian::Big) => Some(CharsetMatch::new("UTF-16BE", 100)),
        Some(Endian::Little) => Some(CharsetMatch::new("UTF-16LE", 100)),
        None => None,
    }
}

/// Guesses UTF-32 from well-formed units whose high bytes are zero.
fn utf32_match(bytes: &[u8]) -> Option<CharsetMatch> {
    if bytes.len() < 4 || bytes.len() % 4 != 0 {
        return None;
    }
    let fits = |endian: Endian| {
        bytes.chunks_exact(4).all(|q| {
            let unit = match endian {
                Endian::Big => u32::from_be_bytes([q[0], q[1], q[2], q[3]]),
                Endian::Little => u32::from_le_bytes([q[0], q[1], q[2], q[3]]),
            };
            char::from_u32(unit).is_some()
        })
    };
    if fits(Endian::Big) {
        Some(CharsetMatch::new("UTF-32BE", 80))
    } else if fits(Endian::Little) {
        Some(CharsetMatch::new("UTF-32LE", 80))
    } else {
        None
    }
}

/// Guesses UTF-16 from zero bytes concentrated in even or odd positions.
fn utf16_match(bytes: &[u8]) -> Option<CharsetMatch> {
    if bytes.len() < 2 || bytes.len() % 2 != 0 {
        return None;
    }
    let units = bytes.len() / 2;
    let even = bytes.iter().step_by(2).filter(|&&b| b == 0).count();
    let odd = bytes.iter().skip(1).step_by(2).filter(|&&b| b == 0).count();
    // At least a third of the units must carry a zero high byte.
    let (endian, zeros, other) = if even >= odd {
        (Endian::Big, even, odd)
    } else {
        (Endian::Little, odd, even)
    };
    if zeros * 3 < units || other * 3 >= units {
        return None;
    }
    let decoded: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|p| match endian {
            Endian::Big => u16::from_be_bytes([p[0], p[1]]),
            Endian::Little => u16::from_le_bytes([p[0], p[1]]),
        })
        .collect();
    let mut i = 0;
    while i < decoded.len() {
        i += utf16::decode(&decoded, i).ok()?.len;
    }
    let confidence = if zeros * 10 >= units * 9 { 80 } else { 60 };
    let name = match endian {
        Endian::Big => "UTF-16BE",
        Endian::Little => "UTF-16LE",
    };
    Some(CharsetMatch::new(name, confidence))
}

/// Ranks the single-byte Latin charsets for non-UTF-8 high bytes.
fn latin_matches(bytes: &[u8], out: &mut Vec<CharsetMatch>) {
    let c1 = bytes.iter().any(|&b| (0x80..=0x9f).contains(&b));
    let cp1252_ok = bytes
        .iter()
        .all(|&b| latin::CHARSET_WINDOWS_1252.byte_to_char(b).is_some());
    if c1 {
        // C1 controls are rare in real Latin-1 text; windows-1252 puts
        // printable characters there.
        if cp1252_ok {
            out.push(CharsetMatch::new("windows-1252", 50));
        }
        out.push(CharsetMatch::new("ISO-8859-1", 20));
    } else {
        out.push(CharsetMatch::new("ISO-8859-1", 40));
        out.push(CharsetMatch::new("windows-1252", 35));
        out.push(CharsetMatch::new("ISO-8859-15", 30));
    }
}

impl CharsetDetector for BasicDetector {
    fn detect(&self, bytes: &[u8]) -> Vec<CharsetMatch> {
        if bytes.is_empty() {
            return Vec::new();
        }
        if let Some(m) = bom_match(bytes) {
            debug!("detected {} from byte order mark", m.name);
            return vec![m];
        }

        let mut out = Vec::new();
        out.extend(utf32_match(bytes));
        out.extend(utf16_match(bytes));

        let has_nul = bytes.contains(&0);
        if bytes.is_ascii() {
            let confidence = if has_nul { 40 } else { 100 };
            out.push(CharsetMatch::new("US-ASCII", confidence));
            out.push(CharsetMatch::new("UTF-8", confidence.saturating_sub(10)));
        } else if validate::is_valid(bytes) {
            let multibyte = bytes.iter().filter(|&&b| b >= 0xc0).count();
            let confidence = 60 + 10 * multibyte.min(4) as u8;
            out.push(CharsetMatch::new("UTF-8", confidence));
            out.push(CharsetMatch::new("ISO-8859-1", 10));
        } else {
            latin_matches(bytes, &mut out);
        }

        // Stable: equal scores keep rule order.
        out.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        debug!(
            "charset ranking: {:?}",
            out.iter()
                .map(|m| (m.name.as_str(), m.confidence))
                .collect::<Vec<_>>()
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn best(bytes: &[u8]) -> String {
        BasicDetector.detect_best(bytes).map(|m| m.name).unwrap_or_default()
    }

    #[test]
    fn byte_order_marks() {
        assert_eq!(best(b"\xef\xbb\xbfhi"), "UTF-8");
        assert_eq!(best(b"\xfe\xff\x00h"), "UTF-16BE");
        assert_eq!(best(b"\xff\xfeh\x00"), "UTF-16LE");
        assert_eq!(best(b"\xff\xfe\x00\x00h\x00\x00\x00"), "UTF-32LE");
        let all = BasicDetector.detect(b"\x00\x00\xfe\xff");
        assert_eq!(all, vec![CharsetMatch::new("UTF-32BE", 100)]);
    }

    #[test]
    fn ascii_and_utf8() {
        assert_eq!(best(b"plain text"), "US-ASCII");
        assert_eq!(best("\u{431}\u{44a}\u{440}\u{437}\u{43e}".as_bytes()), "UTF-8");
        let m = BasicDetector.detect_best("\u{431}\u{44a}\u{440}\u{437}\u{43e}".as_bytes());
        assert_eq!(m.unwrap().confidence, 100);
    }

    #[test]
    fn utf16_without_bom() {
        let bytes: Vec<u8> = "hello".encode_utf16().flat_map(|u| u.to_le_bytes()).collect();
        assert_eq!(best(&bytes), "UTF-16LE");
        let bytes: Vec<u8> = "hello".encode_utf16().flat_map(|u| u.to_be_bytes()).collect();
        assert_eq!(best(&bytes), "UTF-16BE");
    }

    #[test]
    fn utf32_without_bom() {
        let bytes: Vec<u8> = "hi".chars().flat_map(|c| (c as u32).to_be_bytes()).collect();
        assert_eq!(best(&bytes), "UTF-32BE");
    }

    #[test]
    fn latin_family() {
        assert_eq!(best(b"caf\xe9"), "ISO-8859-1");
        assert_eq!(best(b"\x93quoted\x94"), "windows-1252");
    }

    #[test]
    fn ranking_is_descending() {
        let all = BasicDetector.detect(b"caf\xe9");
        assert!(all.windows(2).all(|w| w[0].confidence >= w[1].confidence));
        assert!(all.iter().all(|m| m.language.is_none()));
    }

    #[test]
    fn empty_input() {
        assert!(BasicDetector.detect(b"").is_empty());
    }
}
