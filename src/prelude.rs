// prelude.rs - Convenient re-exports of the commonly used API.
//
//! # Prelude
//!
//! ```
//! use unitext::prelude::*;
//!
//! let bytes = encode(0x10346).unwrap();
//! assert_eq!(bytes.len(), 4);
//! assert_eq!(decode(&bytes, 0).unwrap().code, '\u{10346}');
//! ```

pub use crate::breaks::{BreakFinder, LineBreak, Linebreaker, WordBreak, Wordbreaker};
pub use crate::convert::{ConverterBuilder, ConverterSettings, Converted, TextConverter};
pub use crate::cursor::{Codepoints, Cursor, UncheckedCursor};
pub use crate::detect::{BasicDetector, CharsetDetector, CharsetMatch};
pub use crate::distance::{distance, distance_between};
pub use crate::encodings::utf8::{decode, encode, Decoded, Utf8Bytes};
pub use crate::encodings::{charset_for_label, Charset};
pub use crate::error::TextError;
pub use crate::unicode::NormalizationForm;
pub use crate::validate::{is_valid, repair, repair_with, validate};
