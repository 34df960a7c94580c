// unicode/mod.rs - Codepoint properties, simple case mapping, and Unicode blocks.
// Category tests binary-search the range tables in category_data.

pub mod blocks;
mod category_data;

use bitflags::bitflags;

pub use blocks::{BLOCKS, STANDARD_CHARSET};
use category_data::{
    CR_DIGIT, CR_FORMAT, CR_LETTER, CR_LOWER, CR_PRIVATE_USE, CR_PUNCT, CR_SPACE, CR_TITLE,
    CR_UNASSIGNED, CR_UPPER,
};

// === Range Lookup ===

/// Binary search over flat `[from, to, from, to, ...]` inclusive pairs.
fn in_code_ranges(ranges: &[u32], code: u32) -> bool {
    let n = ranges.len() / 2;
    let mut low = 0usize;
    let mut high = n;
    while low < high {
        let mid = (low + high) / 2;
        if code > ranges[mid * 2 + 1] {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low < n && code >= ranges[low * 2]
}

// === Properties ===

/// True for Unicode scalar values: `0..=0x10FFFF` minus surrogates.
pub fn is_valid(code: u32) -> bool {
    char::from_u32(code).is_some()
}

/// Line and paragraph separators (Zl, Zp).
#[inline]
fn is_separator_line(c: char) -> bool {
    matches!(c, '\u{2028}' | '\u{2029}')
}

/// Format characters (Cf).
pub fn is_format(c: char) -> bool {
    in_code_ranges(CR_FORMAT, c as u32)
}

/// Private use characters (Co).
pub fn is_private_use(c: char) -> bool {
    in_code_ranges(CR_PRIVATE_USE, c as u32)
}

/// C0/C1 controls plus format characters and line/paragraph separators.
pub fn is_control(c: char) -> bool {
    c.is_control() || is_format(c) || is_separator_line(c)
}

/// Unassigned code points (Cn).
pub fn is_unassigned(c: char) -> bool {
    in_code_ranges(CR_UNASSIGNED, c as u32)
}

/// Everything except controls (Cc), format (Cf), unassigned (Cn), private
/// use (Co) and line/paragraph separators (Zl, Zp).
pub fn is_printable(c: char) -> bool {
    !(c.is_control()
        || is_format(c)
        || is_unassigned(c)
        || is_private_use(c)
        || is_separator_line(c))
}

/// Titlecase letters (Lt).
pub fn is_title(c: char) -> bool {
    in_code_ranges(CR_TITLE, c as u32)
}

/// Space separators (Zs, Zl, Zp). ASCII tab and newline are controls, not spaces.
pub fn is_space(c: char) -> bool {
    in_code_ranges(CR_SPACE, c as u32)
}

/// Decimal digits (Nd).
pub fn is_digit(c: char) -> bool {
    in_code_ranges(CR_DIGIT, c as u32)
}

/// Punctuation (Pc, Pd, Ps, Pe, Pi, Pf, Po).
pub fn is_punct(c: char) -> bool {
    in_code_ranges(CR_PUNCT, c as u32)
}

/// Letters (Lu, Ll, Lt, Lm, Lo). Letter-like symbols and combining marks
/// outside those categories are not alphabetic here.
pub fn is_alpha(c: char) -> bool {
    in_code_ranges(CR_LETTER, c as u32)
}

pub fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Lowercase letters (Ll).
pub fn is_lower(c: char) -> bool {
    in_code_ranges(CR_LOWER, c as u32)
}

/// Uppercase letters (Lu).
pub fn is_upper(c: char) -> bool {
    in_code_ranges(CR_UPPER, c as u32)
}

bitflags! {
    /// Character classes a codepoint belongs to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Ctype: u16 {
        const ALPHA = 1 << 0;
        const DIGIT = 1 << 1;
        const ALNUM = 1 << 2;
        const SPACE = 1 << 3;
        const PUNCT = 1 << 4;
        const CNTRL = 1 << 5;
        const PRINT = 1 << 6;
        const LOWER = 1 << 7;
        const UPPER = 1 << 8;
        const TITLE = 1 << 9;
        const ASCII = 1 << 10;
    }
}

/// All classes `c` belongs to.
pub fn ctype(c: char) -> Ctype {
    let mut t = Ctype::empty();
    t.set(Ctype::ALPHA, is_alpha(c));
    t.set(Ctype::DIGIT, is_digit(c));
    t.set(Ctype::ALNUM, is_alphanumeric(c));
    t.set(Ctype::SPACE, is_space(c));
    t.set(Ctype::PUNCT, is_punct(c));
    t.set(Ctype::CNTRL, is_control(c));
    t.set(Ctype::PRINT, is_printable(c));
    t.set(Ctype::LOWER, is_lower(c));
    t.set(Ctype::UPPER, is_upper(c));
    t.set(Ctype::TITLE, is_title(c));
    t.set(Ctype::ASCII, c.is_ascii());
    t
}

// === Simple Case Mapping ===
// One codepoint in, one codepoint out. Characters whose full mapping
// expands (e.g. U+00DF to "SS") map to themselves.

fn single<I: Iterator<Item = char>>(mut it: I) -> Option<char> {
    let first = it.next()?;
    it.next().is_none().then_some(first)
}

pub fn to_lower(c: char) -> char {
    // U+0130 lowercases to "i\u{307}" in full; its simple mapping is plain 'i'.
    if c == '\u{130}' {
        return 'i';
    }
    single(c.to_lowercase()).unwrap_or(c)
}

pub fn to_upper(c: char) -> char {
    single(c.to_uppercase()).unwrap_or(c)
}

pub fn to_lower_all(chars: &[char]) -> Vec<char> {
    chars.iter().map(|&c| to_lower(c)).collect()
}

pub fn to_upper_all(chars: &[char]) -> Vec<char> {
    chars.iter().map(|&c| to_upper(c)).collect()
}

pub fn to_lower_in_place(chars: &mut [char]) {
    for c in chars.iter_mut() {
        *c = to_lower(*c);
    }
}

pub fn to_upper_in_place(chars: &mut [char]) {
    for c in chars.iter_mut() {
        *c = to_upper(*c);
    }
}

// === Normalization Forms ===

/// Unicode normalization form (UAX #15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NormalizationForm {
    /// Canonical decomposition, then canonical composition.
    #[default]
    Nfc,
    /// Canonical decomposition.
    Nfd,
    /// Compatibility decomposition, then canonical composition.
    Nfkc,
    /// Compatibility decomposition.
    Nfkd,
}

// === Blocks ===

/// A named, contiguous range of codepoints from Blocks.txt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    begin: u32,
    end: u32,
    name: &'static str,
}

impl Block {
    pub const fn new(begin: u32, end: u32, name: &'static str) -> Block {
        Block { begin, end, name }
    }

    pub fn begin(&self) -> u32 {
        self.begin
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of codepoints in the block, surrogates included.
    pub fn size(&self) -> usize {
        (self.end - self.begin + 1) as usize
    }

    pub fn contains(&self, c: char) -> bool {
        (self.begin..=self.end).contains(&(c as u32))
    }

    /// Every scalar value in the block. Empty for the surrogate blocks.
    pub fn charset(&self) -> Vec<char> {
        (self.begin..=self.end).filter_map(char::from_u32).collect()
    }

    /// Finds a block by name, ignoring case, spaces, hyphens and underscores.
    pub fn by_name(name: &str) -> Option<&'static Block> {
        BLOCKS.iter().find(|b| loose_eq(b.name, name))
    }

    /// The block containing `c`, if it is in one.
    pub fn of(c: char) -> Option<&'static Block> {
        let code = c as u32;
        let idx = BLOCKS.partition_point(|b| b.end < code);
        BLOCKS.get(idx).filter(|b| b.begin <= code)
    }
}

fn loose_eq(a: &str, b: &str) -> bool {
    let key = |s: &str| {
        s.chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect::<Vec<_>>()
    };
    key(a) == key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_lookup() {
        let ranges = [0x10, 0x20, 0x30, 0x30, 0x100, 0x1ff];
        assert!(in_code_ranges(&ranges, 0x10));
        assert!(in_code_ranges(&ranges, 0x20));
        assert!(!in_code_ranges(&ranges, 0x21));
        assert!(in_code_ranges(&ranges, 0x30));
        assert!(in_code_ranges(&ranges, 0x150));
        assert!(!in_code_ranges(&ranges, 0x200));
        assert!(!in_code_ranges(&[], 0));
    }

    #[test]
    fn validity() {
        assert!(is_valid(0));
        assert!(is_valid(0x10ffff));
        assert!(!is_valid(0xd800));
        assert!(!is_valid(0x110000));
    }

    #[test]
    fn categories() {
        assert!(is_digit('7'));
        assert!(is_digit('\u{660}'));
        assert!(!is_digit('x'));
        assert!(is_space(' '));
        assert!(is_space('\u{3000}'));
        assert!(!is_space('\t'));
        assert!(is_punct('!'));
        assert!(is_punct('\u{300c}'));
        assert!(is_title('\u{1c5}'));
        assert!(!is_title('A'));
    }

    #[test]
    fn control_and_printable() {
        assert!(is_control('\n'));
        assert!(is_control('\u{85}'));
        assert!(is_control('\u{200b}'));
        assert!(is_control('\u{2028}'));
        assert!(!is_printable('\u{200b}'));
        assert!(!is_printable('\u{e000}'));
        assert!(is_printable('a'));
        assert!(is_printable(' '));
    }

    #[test]
    fn supplementary_categories() {
        assert!(is_digit('\u{104a0}'));
        assert!(is_digit('\u{1e950}'));
        assert!(is_punct('\u{10100}'));
        assert!(is_punct('\u{1e95e}'));
        assert!(is_control('\u{1d173}'));
        assert!(!is_printable('\u{1d173}'));
        assert!(is_control('\u{110bd}'));
        assert!(!is_printable('\u{110bd}'));
        assert!(is_format('\u{e0001}'));
    }

    #[test]
    fn letters_follow_general_category() {
        // Lo and Lm letters are neither lower nor upper case.
        assert!(is_alpha('\u{aa}') && !is_lower('\u{aa}'));
        assert!(is_alpha('\u{2b0}') && !is_lower('\u{2b0}'));
        // Circled capital A is a symbol (So).
        assert!(!is_upper('\u{24b6}') && !is_alpha('\u{24b6}'));
        assert!(is_upper('\u{10400}'));
        assert!(is_lower('\u{10428}'));
        assert!(is_alphanumeric('\u{104a0}'));
    }

    #[test]
    fn unassigned_is_not_printable() {
        assert!(is_unassigned('\u{378}'));
        assert!(!is_printable('\u{378}'));
        assert!(!is_unassigned('\u{30a1}'));
    }

    #[test]
    fn ctype_flags() {
        let t = ctype('A');
        assert!(t.contains(Ctype::ALPHA | Ctype::ALNUM | Ctype::UPPER | Ctype::PRINT));
        assert!(!t.intersects(Ctype::DIGIT | Ctype::LOWER));
        assert!(ctype('5').contains(Ctype::DIGIT | Ctype::ALNUM));
    }

    #[test]
    fn simple_case_mapping() {
        assert_eq!(to_lower('A'), 'a');
        assert_eq!(to_upper('\u{e9}'), '\u{c9}');
        assert_eq!(to_upper('\u{df}'), '\u{df}');
        assert_eq!(to_lower('\u{130}'), 'i');
        assert_eq!(to_upper('\u{1c6}'), '\u{1c4}');
    }

    #[test]
    fn in_place_mapping_direction() {
        let mut chars = ['a', 'B', 'c'];
        to_upper_in_place(&mut chars);
        assert_eq!(chars, ['A', 'B', 'C']);
        to_lower_in_place(&mut chars);
        assert_eq!(chars, ['a', 'b', 'c']);
        assert_eq!(to_upper_all(&['x', 'y']), vec!['X', 'Y']);
        assert_eq!(to_lower_all(&['X', 'y']), vec!['x', 'y']);
    }

    #[test]
    fn block_lookup() {
        let block = Block::of('A').unwrap();
        assert_eq!(block.name(), "BASIC_LATIN");
        assert_eq!(block.size(), 128);
        assert_eq!(Block::by_name("Basic Latin"), Some(&blocks::BASIC_LATIN));
        assert_eq!(Block::of('\u{10100}').unwrap().name(), "AEGEAN_NUMBERS");
        assert!(Block::by_name("no such block").is_none());
    }

    #[test]
    fn blocks_are_sorted() {
        for pair in BLOCKS.windows(2) {
            assert!(pair[0].end() < pair[1].begin());
        }
    }

    #[test]
    fn surrogate_block_has_no_chars() {
        let block = Block::by_name("HIGH_SURROGATES").unwrap();
        assert!(block.size() > 0);
        assert!(block.charset().is_empty());
    }

    #[test]
    fn default_form_is_nfc() {
        assert_eq!(NormalizationForm::default(), NormalizationForm::Nfc);
    }
}
