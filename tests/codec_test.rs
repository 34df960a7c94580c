// codec_test.rs - Integration tests for the UTF-8 decoder and encoder.

use unitext::encodings::utf8::{
    append, append_all, decode, decode_unchecked, encode, encode_into, encoded_len,
    left_adjust_char_head, sequence_len, Decoded,
};
use unitext::error::TextError;

// === Encoder ===

#[test]
fn encode_gothic_letter_is_four_bytes() {
    let bytes = encode(0x10346).unwrap();
    assert_eq!(bytes.len(), 4);
    let d = decode(&bytes, 0).unwrap();
    assert_eq!(d.code as u32, 0x10346);
    assert_eq!(d.len, 4);
}

#[test]
fn encode_length_boundaries() {
    let cases = [
        (0x00, 1),
        (0x7f, 1),
        (0x80, 2),
        (0x7ff, 2),
        (0x800, 3),
        (0xd7ff, 3),
        (0xe000, 3),
        (0xffff, 3),
        (0x10000, 4),
        (0x10ffff, 4),
    ];
    for (code, len) in cases {
        assert_eq!(encoded_len(code), Ok(len), "U+{:04X}", code);
        let bytes = encode(code).unwrap();
        assert_eq!(bytes.len(), len);
        assert_eq!(decode(&bytes, 0).unwrap(), Decoded {
            code: char::from_u32(code).unwrap(),
            len
        });
    }
}

#[test]
fn encode_matches_std() {
    for c in ['A', '\u{e9}', '\u{30a1}', '\u{65e5}', '\u{1f600}'] {
        let mut expected = [0u8; 4];
        let expected = c.encode_utf8(&mut expected).as_bytes();
        assert_eq!(encode(c as u32).unwrap().as_slice(), expected);
    }
}

#[test]
fn encode_into_leaves_buffer_on_error() {
    let mut buf = [0xaa; 4];
    assert_eq!(
        encode_into(0xdc00, &mut buf),
        Err(TextError::InvalidCodepoint(0xdc00))
    );
    assert_eq!(buf, [0xaa; 4]);
    assert_eq!(encode_into(0xe9, &mut buf), Ok(2));
    assert_eq!(&buf[..2], &[0xc3, 0xa9]);
}

#[test]
fn encode_rejects_every_surrogate_edge() {
    for code in [0xd800, 0xdbff, 0xdc00, 0xdfff] {
        assert_eq!(encode(code), Err(TextError::InvalidCodepoint(code)));
    }
    assert_eq!(encode(u32::MAX), Err(TextError::InvalidCodepoint(u32::MAX)));
}

// === Decoder ===

#[test]
fn decode_walks_mixed_text() {
    let s = "\u{648}\u{627}\u{644}\u{62b}\u{639}\u{644}\u{628}";
    let buf = s.as_bytes();
    let mut pos = 0;
    let mut decoded = String::new();
    while pos < buf.len() {
        let d = decode(buf, pos).unwrap();
        decoded.push(d.code);
        pos += d.len;
    }
    assert_eq!(decoded, s);
}

#[test]
fn decode_never_reads_past_end() {
    for truncated in [&[0xc3][..], &[0xe6, 0x97][..], &[0xf0, 0x90, 0x8d][..]] {
        assert_eq!(
            decode(truncated, 0),
            Err(TextError::InvalidSequence { offset: 0 })
        );
    }
}

#[test]
fn decode_reports_offset_of_first_byte() {
    let buf = b"ok\xe0\x80\x80";
    assert_eq!(decode(buf, 2), Err(TextError::InvalidSequence { offset: 2 }));
}

#[test]
fn decode_rejects_lone_continuation() {
    assert_eq!(decode(b"\x80", 0), Err(TextError::InvalidSequence { offset: 0 }));
    assert_eq!(sequence_len(0xbf), 0);
}

#[test]
fn decode_unchecked_on_validated_buffer() {
    let s = "\u{10346}\u{65e5}\u{672c}";
    let d = unsafe { decode_unchecked(s.as_bytes(), 4) };
    assert_eq!(d, Decoded { code: '\u{65e5}', len: 3 });
}

// === Helpers ===

#[test]
fn append_reports_invalid() {
    let mut s = String::new();
    append(&mut s, 0x30a1).unwrap();
    assert_eq!(s, "\u{30a1}");
    assert_eq!(append(&mut s, 0x110000), Err(TextError::InvalidCodepoint(0x110000)));
    assert_eq!(s, "\u{30a1}");
}

#[test]
fn append_all_keeps_original_on_error() {
    let mut s = String::from("keep");
    assert!(append_all(&mut s, &[0x21, 0xd800]).is_err());
    assert_eq!(s, "keep");
}

#[test]
fn left_adjust_finds_lead_byte() {
    let buf = "x\u{10346}".as_bytes();
    for pos in 1..5 {
        assert_eq!(left_adjust_char_head(buf, pos), 1);
    }
}
