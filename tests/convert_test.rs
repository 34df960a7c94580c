// convert_test.rs - Integration tests for encoding-form conversions,
// named charsets and detection.

use unitext::convert::{
    char_to_utf16, char_to_utf8, utf16_to_utf32, utf16_to_utf8, utf32_to_utf16, utf32_to_utf8,
    utf8_to_utf16, utf8_to_utf32, ConverterSettings, TextConverter,
};
use unitext::detect::{BasicDetector, CharsetDetector};
use unitext::encodings::{charset_for_label, charsets};
use unitext::error::TextError;

const POETRY: &[&str] = &[
    "k\u{f6}lt\u{e9}szet",
    "poetry",
    "F\u{dc}\u{df}BALL",
    "th\u{1a1}",
    "\u{8a69}",
    "\u{30dd}\u{30a8}\u{30c8}\u{30ea}\u{30fc}",
    "\u{43f}\u{43e}\u{435}\u{437}\u{438}\u{44f}",
    "\u{c95}\u{cbe}\u{cb5}\u{ccd}\u{caf}",
    "\u{b95}\u{bb5}\u{bbf}\u{ba4}\u{bc8}",
    "\u{623}\u{634}\u{639}\u{627}\u{631}",
];

// === Encoding Forms ===

#[test]
fn utf8_utf16_utf32_agree() {
    for text in POETRY {
        let u16s = utf8_to_utf16(text.as_bytes()).unwrap();
        let u32s = utf8_to_utf32(text.as_bytes()).unwrap();
        assert_eq!(utf16_to_utf8(&u16s).unwrap(), *text);
        assert_eq!(utf32_to_utf8(&u32s).unwrap(), *text);
        assert_eq!(utf16_to_utf32(&u16s).unwrap(), u32s);
        assert_eq!(utf32_to_utf16(&u32s).unwrap(), u16s);
    }
}

#[test]
fn single_codepoints() {
    assert_eq!(char_to_utf8(0x30a1).unwrap(), "\u{30a1}");
    assert_eq!(char_to_utf16(0x30a1).unwrap(), vec![0x30a1]);
    assert_eq!(char_to_utf8(0xdfff), Err(TextError::InvalidCodepoint(0xdfff)));
}

#[test]
fn unpaired_surrogate_offset_counts_units() {
    let units = [0x41, 0x42, 0xdbff, 0x43];
    assert_eq!(
        utf16_to_utf8(&units),
        Err(TextError::InvalidSequence { offset: 2 })
    );
    assert_eq!(
        utf16_to_utf32(&units),
        Err(TextError::InvalidSequence { offset: 2 })
    );
}

// === TextConverter ===

#[test]
fn utf32_round_trip_through_converter() {
    let input = "\u{431}\u{44a}\u{440}\u{437}\u{43e} \u{43a}\u{430}\u{444}\u{44f}\u{432}\u{43e}";
    let forward = TextConverter::new("UTF-8", "UTF-32").unwrap();
    let back = TextConverter::new("UTF-32", "UTF-8").unwrap();

    let wide = forward.convert_str(input).unwrap();
    // BOM plus four bytes per character.
    assert_eq!(wide.bytes.len(), 4 + 4 * input.chars().count());
    let narrow = back.convert(&wide.bytes).unwrap();
    assert_eq!(narrow.bytes, input.as_bytes());
}

#[test]
fn every_charset_round_trips_ascii() {
    for cs in charsets() {
        let bytes = TextConverter::convert_between(b"Hello, world", "UTF-8", cs.name()).unwrap();
        let text = TextConverter::convert_between(&bytes, cs.name(), "UTF-8").unwrap();
        assert_eq!(text, b"Hello, world", "{}", cs.name());
    }
}

#[test]
fn latin9_and_windows_1252_euro() {
    let euro = "\u{20ac}5".as_bytes();
    assert_eq!(
        TextConverter::convert_between(euro, "UTF-8", "ISO-8859-15").unwrap(),
        b"\xa45"
    );
    assert_eq!(
        TextConverter::convert_between(euro, "UTF-8", "windows-1252").unwrap(),
        b"\x805"
    );
    assert_eq!(
        TextConverter::convert_between(euro, "UTF-8", "ISO-8859-1"),
        Err(TextError::Unmappable { offset: 0, code: 0x20ac })
    );
}

#[test]
fn settings_drive_the_converter() {
    let settings = ConverterSettings {
        input: "US-ASCII".to_string(),
        output: "UTF-16LE".to_string(),
        skip_errors: true,
        default_character: '\u{fffd}',
    };
    let conv = TextConverter::with_settings(settings.clone()).unwrap();
    assert_eq!(conv.settings(), &settings);
    let out = conv.convert(b"A\xffB").unwrap();
    assert_eq!(out.bytes, [0x41, 0x00, 0xfd, 0xff, 0x42, 0x00]);
    assert_eq!(out.replaced, 1);
}

#[test]
fn invalid_utf8_input_is_reported_in_strict_mode() {
    let conv = TextConverter::new("UTF-8", "UTF-16BE").unwrap();
    assert_eq!(
        conv.convert(b"ok\xc3"),
        Err(TextError::InvalidSequence { offset: 2 })
    );
}

#[test]
fn labels_are_loose() {
    for label in ["utf-8", "UTF8", "Utf_8", "utf 8"] {
        assert_eq!(charset_for_label(label).unwrap().name(), "UTF-8");
    }
    assert!(matches!(
        charset_for_label("windows-1251"),
        Err(TextError::UnsupportedEncoding(_))
    ));
}

// === Detection ===

#[test]
fn detected_charset_converts_back() {
    let original = "\u{201c}Caf\u{e9}\u{201d}";
    let legacy = TextConverter::convert_between(original.as_bytes(), "UTF-8", "windows-1252").unwrap();
    let guess = BasicDetector.detect_best(&legacy).unwrap();
    assert_eq!(guess.name, "windows-1252");
    let restored = TextConverter::convert_between(&legacy, &guess.name, "UTF-8").unwrap();
    assert_eq!(restored, original.as_bytes());
}

#[test]
fn detection_of_converter_output() {
    let utf16 = TextConverter::convert_between("hello".as_bytes(), "UTF-8", "UTF-16").unwrap();
    let guess = BasicDetector.detect_best(&utf16).unwrap();
    assert_eq!(guess.name, "UTF-16BE");
    assert_eq!(guess.confidence, 100);
}
