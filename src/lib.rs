//! # unitext
//!
//! UTF-8 codec and validating cursors, with conversions between encoding
//! forms and named charsets, charset detection, line and word breaking, and
//! Unicode string operations.
//!
//! The core works on borrowed byte buffers and never allocates: decode and
//! encode single codepoints, walk a buffer forward and backward by whole
//! codepoints, validate, repair, and count.
//!
//! ## Quick Start
//!
//! ```rust
//! use unitext::prelude::*;
//!
//! let buf = "a\u{10346}\u{65e5}".as_bytes();
//! let mut cursor = Cursor::new(buf);
//! assert_eq!(cursor.next().unwrap(), Some('a'));
//! assert_eq!(cursor.next().unwrap(), Some('\u{10346}'));
//! assert_eq!(cursor.prior().unwrap(), Some('\u{10346}'));
//! assert_eq!(cursor.position(), 1);
//!
//! assert_eq!(distance(buf).unwrap(), 3);
//! assert_eq!(
//!     validate(b"\xe6\x97\xa5\xd1\x88\xfa"),
//!     Err(TextError::InvalidSequence { offset: 5 })
//! );
//! assert_eq!(repair(b"ab\xffc"), "ab\u{fffd}c");
//! ```
//!
//! Charset conversion is configured per converter:
//!
//! ```rust
//! use unitext::prelude::*;
//!
//! let conv = TextConverter::builder("UTF-8", "ISO-8859-1")
//!     .skip_errors(true)
//!     .default_character('?')
//!     .build()
//!     .unwrap();
//! let out = conv.convert("caf\u{e9} \u{65e5}".as_bytes()).unwrap();
//! assert_eq!(out.bytes, b"caf\xe9 ?");
//! assert_eq!(out.replaced, 1);
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`encodings`] | UTF-8/16/32 codecs and the named charset registry |
//! | [`cursor`] | Checked and unchecked codepoint cursors |
//! | [`validate`] | Validation, repair, byte order marks |
//! | [`distance`] | Codepoint counting |
//! | [`convert`] | Encoding-form conversions and `TextConverter` |
//! | [`detect`] | Charset detection |
//! | [`breaks`] | Line (UAX #14) and word (UAX #29) breaks |
//! | [`text`] | Normalization, case folding, case mapping |
//! | [`unicode`] | Codepoint properties and Unicode blocks |
//! | [`error`] | `TextError` |

pub mod breaks;
pub mod convert;
pub mod cursor;
pub mod detect;
pub mod distance;
pub mod encodings;
pub mod error;
pub mod prelude;
pub mod text;
pub mod unicode;
pub mod validate;
