// breaks.rs - Line (UAX #14) and word (UAX #29) break finding.
//
// Break opportunities come from unicode-linebreak and unicode-segmentation and
// are projected onto code units: one status per unit, giving the break status
// after that unit. Units before the last one of a character are InsideChar.

use unicode_linebreak::{linebreaks, BreakOpportunity};
use unicode_segmentation::UnicodeSegmentation;

use crate::convert;
use crate::error::TextError;

/// Language used when none is given.
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineBreak {
    /// A line break is required after this unit.
    MustBreak,
    AllowBreak,
    NoBreak,
    /// Not the last unit of its character.
    InsideChar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordBreak {
    AllowBreak,
    NoBreak,
    InsideChar,
}

/// A break iterator that annotates text in any of the three encoding forms.
pub trait BreakFinder {
    type Break: Copy;

    /// The language tag this finder was created for.
    fn language(&self) -> &str;

    /// One status per byte of `text`.
    fn find_breaks(&self, text: &str) -> Vec<Self::Break>;

    /// One status per UTF-16 code unit. Unpaired surrogates are an error.
    fn find_breaks_utf16(&self, units: &[u16]) -> Result<Vec<Self::Break>, TextError>;

    /// One status per character.
    fn find_breaks_utf32(&self, chars: &[char]) -> Vec<Self::Break>;
}

/// Spreads per-character statuses over code units.
fn project<B: Copy>(text: &str, per_char: &[B], inside: B, unit_len: fn(char) -> usize) -> Vec<B> {
    let mut out = Vec::with_capacity(text.len());
    for (c, &status) in text.chars().zip(per_char) {
        for _ in 1..unit_len(c) {
            out.push(inside);
        }
        out.push(status);
    }
    out
}

// === Line Breaks ===

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Linebreaker {
    language: String,
}

impl Linebreaker {
    /// The language tag is recorded for the caller; the UAX #14 default rules
    /// apply to every language.
    pub fn new(language: &str) -> Self {
        Linebreaker {
            language: language.to_string(),
        }
    }

    /// Status after each character of `text`.
    pub fn char_breaks(&self, text: &str) -> Vec<LineBreak> {
        let mut opportunities = linebreaks(text).peekable();
        let mut out = Vec::with_capacity(text.len());
        for (i, c) in text.char_indices() {
            let end = i + c.len_utf8();
            while opportunities.next_if(|&(pos, _)| pos < end).is_some() {}
            let status = match opportunities.next_if(|&(pos, _)| pos == end) {
                Some((_, BreakOpportunity::Mandatory)) => LineBreak::MustBreak,
                Some((_, BreakOpportunity::Allowed)) => LineBreak::AllowBreak,
                None => LineBreak::NoBreak,
            };
            out.push(status);
        }
        out
    }
}

impl Default for Linebreaker {
    fn default() -> Self {
        Linebreaker::new(DEFAULT_LANGUAGE)
    }
}

impl BreakFinder for Linebreaker {
    type Break = LineBreak;

    fn language(&self) -> &str {
        &self.language
    }

    fn find_breaks(&self, text: &str) -> Vec<LineBreak> {
        project(text, &self.char_breaks(text), LineBreak::InsideChar, char::len_utf8)
    }

    fn find_breaks_utf16(&self, units: &[u16]) -> Result<Vec<LineBreak>, TextError> {
        let text = convert::utf16_to_utf8(units)?;
        Ok(project(
            &text,
            &self.char_breaks(&text),
            LineBreak::InsideChar,
            char::len_utf16,
        ))
    }

    fn find_breaks_utf32(&self, chars: &[char]) -> Vec<LineBreak> {
        let text: String = chars.iter().collect();
        self.char_breaks(&text)
    }
}

// === Word Breaks ===

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordbreaker {
    language: String,
}

impl Wordbreaker {
    /// The language tag is recorded for the caller; the UAX #29 default rules
    /// apply to every language.
    pub fn new(language: &str) -> Self {
        Wordbreaker {
            language: language.to_string(),
        }
    }

    /// Status after each character of `text`.
    pub fn char_breaks(&self, text: &str) -> Vec<WordBreak> {
        let mut bounds = text
            .split_word_bound_indices()
            .map(|(start, word)| start + word.len())
            .peekable();
        let mut out = Vec::with_capacity(text.len());
        for (i, c) in text.char_indices() {
            let end = i + c.len_utf8();
            while bounds.next_if(|&pos| pos < end).is_some() {}
            let status = if bounds.next_if_eq(&end).is_some() {
                WordBreak::AllowBreak
            } else {
                WordBreak::NoBreak
            };
            out.push(status);
        }
        out
    }
}

impl Default for Wordbreaker {
    fn default() -> Self {
        Wordbreaker::new(DEFAULT_LANGUAGE)
    }
}

impl BreakFinder for Wordbreaker {
    type Break = WordBreak;

    fn language(&self) -> &str {
        &self.language
    }

    fn find_breaks(&self, text: &str) -> Vec<WordBreak> {
        project(text, &self.char_breaks(text), WordBreak::InsideChar, char::len_utf8)
    }

    fn find_breaks_utf16(&self, units: &[u16]) -> Result<Vec<WordBreak>, TextError> {
        let text = convert::utf16_to_utf8(units)?;
        Ok(project(
            &text,
            &self.char_breaks(&text),
            WordBreak::InsideChar,
            char::len_utf16,
        ))
    }

    fn find_breaks_utf32(&self, chars: &[char]) -> Vec<WordBreak> {
        let text: String = chars.iter().collect();
        self.char_breaks(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LineBreak::*;

    #[test]
    fn line_breaks_after_spaces() {
        let breaks = Linebreaker::default().find_breaks("ab cd");
        assert_eq!(breaks, vec![NoBreak, NoBreak, AllowBreak, NoBreak, MustBreak]);
    }

    #[test]
    fn line_break_after_newline_is_mandatory() {
        let breaks = Linebreaker::default().find_breaks("a\nb");
        assert_eq!(breaks, vec![NoBreak, MustBreak, MustBreak]);
    }

    #[test]
    fn multibyte_units_are_inside_char() {
        let breaks = Linebreaker::default().find_breaks("\u{e9} x");
        assert_eq!(breaks, vec![InsideChar, NoBreak, AllowBreak, MustBreak]);
    }

    #[test]
    fn empty_text_has_no_breaks() {
        assert!(Linebreaker::default().find_breaks("").is_empty());
        assert!(Wordbreaker::default().find_breaks("").is_empty());
    }

    #[test]
    fn language_is_kept() {
        assert_eq!(Linebreaker::new("th").language(), "th");
        assert_eq!(Wordbreaker::default().language(), "en");
    }

    #[test]
    fn word_breaks() {
        let breaks = Wordbreaker::default().find_breaks("hi there");
        assert_eq!(
            breaks,
            vec![
                WordBreak::NoBreak,
                WordBreak::AllowBreak,
                WordBreak::AllowBreak,
                WordBreak::NoBreak,
                WordBreak::NoBreak,
                WordBreak::NoBreak,
                WordBreak::NoBreak,
                WordBreak::AllowBreak,
            ]
        );
    }

    #[test]
    fn utf16_projection() {
        let units: Vec<u16> = "\u{10346} a".encode_utf16().collect();
        let breaks = Linebreaker::default().find_breaks_utf16(&units).unwrap();
        assert_eq!(breaks.len(), units.len());
        assert_eq!(breaks[0], InsideChar);
        assert_eq!(*breaks.last().unwrap(), MustBreak);
    }

    #[test]
    fn utf16_unpaired_surrogate() {
        assert_eq!(
            Linebreaker::default().find_breaks_utf16(&[0x61, 0xdc00]),
            Err(TextError::InvalidSequence { offset: 1 })
        );
    }
}
