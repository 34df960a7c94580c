// unicode/blocks.rs - Unicode block ranges.
// Generated from https://www.unicode.org/Public/UNIDATA/Blocks.txt.

use super::Block;

pub const BASIC_LATIN: Block = Block::new(0x0000, 0x007F, "BASIC_LATIN");
pub const LATIN_1_SUPPLEMENT: Block = Block::new(0x0080, 0x00FF, "LATIN_1_SUPPLEMENT");
pub const LATIN_EXTENDED_A: Block = Block::new(0x0100, 0x017F, "LATIN_EXTENDED_A");
pub const LATIN_EXTENDED_B: Block = Block::new(0x0180, 0x024F, "LATIN_EXTENDED_B");
pub const IPA_EXTENSIONS: Block = Block::new(0x0250, 0x02AF, "IPA_EXTENSIONS");
pub const SPACING_MODIFIER_LETTERS: Block = Block::new(0x02B0, 0x02FF, "SPACING_MODIFIER_LETTERS");
pub const COMBINING_DIACRITICAL_MARKS: Block = Block::new(0x0300, 0x036F, "COMBINING_DIACRITICAL_MARKS");
pub const GREEK_AND_COPTIC: Block = Block::new(0x0370, 0x03FF, "GREEK_AND_COPTIC");
pub const CYRILLIC: Block = Block::new(0x0400, 0x04FF, "CYRILLIC");
pub const CYRILLIC_SUPPLEMENT: Block = Block::new(0x0500, 0x052F, "CYRILLIC_SUPPLEMENT");
pub const ARMENIAN: Block = Block::new(0x0530, 0x058F, "ARMENIAN");
pub const HEBREW: Block = Block::new(0x0590, 0x05FF, "HEBREW");
pub const ARABIC: Block = Block::new(0x0600, 0x06FF, "ARABIC");
pub const SYRIAC: Block = Block::new(0x0700, 0x074F, "SYRIAC");
pub const ARABIC_SUPPLEMENT: Block = Block::new(0x0750, 0x077F, "ARABIC_SUPPLEMENT");
pub const THAANA: Block = Block::new(0x0780, 0x07BF, "THAANA");
pub const NKO: Block = Block::new(0x07C0, 0x07FF, "NKO");
pub const SAMARITAN: Block = Block::new(0x0800, 0x083F, "SAMARITAN");
pub const MANDAIC: Block = Block::new(0x0840, 0x085F, "MANDAIC");
pub const SYRIAC_SUPPLEMENT: Block = Block::new(0x0860, 0x086F, "SYRIAC_SUPPLEMENT");
pub const ARABIC_EXTENDED_A: Block = Block::new(0x08A0, 0x08FF, "ARABIC_EXTENDED_A");
pub const DEVANAGARI: Block = Block::new(0x0900, 0x097F, "DEVANAGARI");
pub const BENGALI: Block = Block::new(0x0980, 0x09FF, "BENGALI");
pub const GURMUKHI: Block = Block::new(0x0A00, 0x0A7F, "GURMUKHI");
pub const GUJARATI: Block = Block::new(0x0A80, 0x0AFF, "GUJARATI");
pub const ORIYA: Block = Block::new(0x0B00, 0x0B7F, "ORIYA");
pub const TAMIL: Block = Block::new(0x0B80, 0x0BFF, "TAMIL");
pub const TELUGU: Block = Block::new(0x0C00, 0x0C7F, "TELUGU");
pub const KANNADA: Block = Block::new(0x0C80, 0x0CFF, "KANNADA");
pub const MALAYALAM: Block = Block::new(0x0D00, 0x0D7F, "MALAYALAM");
pub const SINHALA: Block = Block::new(0x0D80, 0x0DFF, "SINHALA");
pub const THAI: Block = Block::new(0x0E00, 0x0E7F, "THAI");
pub const LAO: Block = Block::new(0x0E80, 0x0EFF, "LAO");
pub const TIBETAN: Block = Block::new(0x0F00, 0x0FFF, "TIBETAN");
pub const MYANMAR: Block = Block::new(0x1000, 0x109F, "MYANMAR");
pub const GEORGIAN: Block = Block::new(0x10A0, 0x10FF, "GEORGIAN");
pub const HANGUL_JAMO: Block = Block::new(0x1100, 0x11FF, "HANGUL_JAMO");
pub const ETHIOPIC: Block = Block::new(0x1200, 0x137F, "ETHIOPIC");
pub const ETHIOPIC_SUPPLEMENT: Block = Block::new(0x1380, 0x139F, "ETHIOPIC_SUPPLEMENT");
pub const CHEROKEE: Block = Block::new(0x13A0, 0x13FF, "CHEROKEE");
pub const UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS: Block = Block::new(0x1400, 0x167F, "UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS");
pub const OGHAM: Block = Block::new(0x1680, 0x169F, "OGHAM");
pub const RUNIC: Block = Block::new(0x16A0, 0x16FF, "RUNIC");
pub const TAGALOG: Block = Block::new(0x1700, 0x171F, "TAGALOG");
pub const HANUNOO: Block = Block::new(0x1720, 0x173F, "HANUNOO");
pub const BUHID: Block = Block::new(0x1740, 0x175F, "BUHID");
pub const TAGBANWA: Block = Block::new(0x1760, 0x177F, "TAGBANWA");
pub const KHMER: Block = Block::new(0x1780, 0x17FF, "KHMER");
pub const MONGOLIAN: Block = Block::new(0x1800, 0x18AF, "MONGOLIAN");
pub const UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS_EXTENDED: Block = Block::new(0x18B0, 0x18FF, "UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS_EXTENDED");
pub const LIMBU: Block = Block::new(0x1900, 0x194F, "LIMBU");
pub const TAI_LE: Block = Block::new(0x1950, 0x197F, "TAI_LE");
pub const NEW_TAI_LUE: Block = Block::new(0x1980, 0x19DF, "NEW_TAI_LUE");
pub const KHMER_SYMBOLS: Block = Block::new(0x19E0, 0x19FF, "KHMER_SYMBOLS");
pub const BUGINESE: Block = Block::new(0x1A00, 0x1A1F, "BUGINESE");
pub const TAI_THAM: Block = Block::new(0x1A20, 0x1AAF, "TAI_THAM");
pub const COMBINING_DIACRITICAL_MARKS_EXTENDED: Block = Block::new(0x1AB0, 0x1AFF, "COMBINING_DIACRITICAL_MARKS_EXTENDED");
pub const BALINESE: Block = Block::new(0x1B00, 0x1B7F, "BALINESE");
pub const SUNDANESE: Block = Block::new(0x1B80, 0x1BBF, "SUNDANESE");
pub const BATAK: Block = Block::new(0x1BC0, 0x1BFF, "BATAK");
pub const LEPCHA: Block = Block::new(0x1C00, 0x1C4F, "LEPCHA");
pub const OL_CHIKI: Block = Block::new(0x1C50, 0x1C7F, "OL_CHIKI");
pub const CYRILLIC_EXTENDED_C: Block = Block::new(0x1C80, 0x1C8F, "CYRILLIC_EXTENDED_C");
pub const GEORGIAN_EXTENDED: Block = Block::new(0x1C90, 0x1CBF, "GEORGIAN_EXTENDED");
pub const SUNDANESE_SUPPLEMENT: Block = Block::new(0x1CC0, 0x1CCF, "SUNDANESE_SUPPLEMENT");
pub const VEDIC_EXTENSIONS: Block = Block::new(0x1CD0, 0x1CFF, "VEDIC_EXTENSIONS");
pub const PHONETIC_EXTENSIONS: Block = Block::new(0x1D00, 0x1D7F, "PHONETIC_EXTENSIONS");
pub const PHONETIC_EXTENSIONS_SUPPLEMENT: Block = Block::new(0x1D80, 0x1DBF, "PHONETIC_EXTENSIONS_SUPPLEMENT");
pub const COMBINING_DIACRITICAL_MARKS_SUPPLEMENT: Block = Block::new(0x1DC0, 0x1DFF, "COMBINING_DIACRITICAL_MARKS_SUPPLEMENT");
pub const LATIN_EXTENDED_ADDITIONAL: Block = Block::new(0x1E00, 0x1EFF, "LATIN_EXTENDED_ADDITIONAL");
pub const GREEK_EXTENDED: Block = Block::new(0x1F00, 0x1FFF, "GREEK_EXTENDED");
pub const GENERAL_PUNCTUATION: Block = Block::new(0x2000, 0x206F, "GENERAL_PUNCTUATION");
pub const SUPERSCRIPTS_AND_SUBSCRIPTS: Block = Block::new(0x2070, 0x209F, "SUPERSCRIPTS_AND_SUBSCRIPTS");
pub const CURRENCY_SYMBOLS: Block = Block::new(0x20A0, 0x20CF, "CURRENCY_SYMBOLS");
pub const COMBINING_DIACRITICAL_MARKS_FOR_SYMBOLS: Block = Block::new(0x20D0, 0x20FF, "COMBINING_DIACRITICAL_MARKS_FOR_SYMBOLS");
pub const LETTERLIKE_SYMBOLS: Block = Block::new(0x2100, 0x214F, "LETTERLIKE_SYMBOLS");
pub const NUMBER_FORMS: Block = Block::new(0x2150, 0x218F, "NUMBER_FORMS");
pub const ARROWS: Block = Block::new(0x2190, 0x21FF, "ARROWS");
pub const MATHEMATICAL_OPERATORS: Block = Block::new(0x2200, 0x22FF, "MATHEMATICAL_OPERATORS");
pub const MISCELLANEOUS_TECHNICAL: Block = Block::new(0x2300, 0x23FF, "MISCELLANEOUS_TECHNICAL");
pub const CONTROL_PICTURES: Block = Block::new(0x2400, 0x243F, "CONTROL_PICTURES");
pub const OPTICAL_CHARACTER_RECOGNITION: Block = Block::new(0x2440, 0x245F, "OPTICAL_CHARACTER_RECOGNITION");
pub const ENCLOSED_ALPHANUMERICS: Block = Block::new(0x2460, 0x24FF, "ENCLOSED_ALPHANUMERICS");
pub const BOX_DRAWING: Block = Block::new(0x2500, 0x257F, "BOX_DRAWING");
pub const BLOCK_ELEMENTS: Block = Block::new(0x2580, 0x259F, "BLOCK_ELEMENTS");
pub const GEOMETRIC_SHAPES: Block = Block::new(0x25A0, 0x25FF, "GEOMETRIC_SHAPES");
pub const MISCELLANEOUS_SYMBOLS: Block = Block::new(0x2600, 0x26FF, "MISCELLANEOUS_SYMBOLS");
pub const DINGBATS: Block = Block::new(0x2700, 0x27BF, "DINGBATS");
pub const MISCELLANEOUS_MATHEMATICAL_SYMBOLS_A: Block = Block::new(0x27C0, 0x27EF, "MISCELLANEOUS_MATHEMATICAL_SYMBOLS_A");
pub const SUPPLEMENTAL_ARROWS_A: Block = Block::new(0x27F0, 0x27FF, "SUPPLEMENTAL_ARROWS_A");
pub const BRAILLE_PATTERNS: Block = Block::new(0x2800, 0x28FF, "BRAILLE_PATTERNS");
pub const SUPPLEMENTAL_ARROWS_B: Block = Block::new(0x2900, 0x297F, "SUPPLEMENTAL_ARROWS_B");
pub const MISCELLANEOUS_MATHEMATICAL_SYMBOLS_B: Block = Block::new(0x2980, 0x29FF, "MISCELLANEOUS_MATHEMATICAL_SYMBOLS_B");
pub const SUPPLEMENTAL_MATHEMATICAL_OPERATORS: Block = Block::new(0x2A00, 0x2AFF, "SUPPLEMENTAL_MATHEMATICAL_OPERATORS");
pub const MISCELLANEOUS_SYMBOLS_AND_ARROWS: Block = Block::new(0x2B00, 0x2BFF, "MISCELLANEOUS_SYMBOLS_AND_ARROWS");
pub const GLAGOLITIC: Block = Block::new(0x2C00, 0x2C5F, "GLAGOLITIC");
pub const LATIN_EXTENDED_C: Block = Block::new(0x2C60, 0x2C7F, "LATIN_EXTENDED_C");
pub const COPTIC: Block = Block::new(0x2C80, 0x2CFF, "COPTIC");
pub const GEORGIAN_SUPPLEMENT: Block = Block::new(0x2D00, 0x2D2F, "GEORGIAN_SUPPLEMENT");
pub const TIFINAGH: Block = Block::new(0x2D30, 0x2D7F, "TIFINAGH");
pub const ETHIOPIC_EXTENDED: Block = Block::new(0x2D80, 0x2DDF, "ETHIOPIC_EXTENDED");
pub const CYRILLIC_EXTENDED_A: Block = Block::new(0x2DE0, 0x2DFF, "CYRILLIC_EXTENDED_A");
pub const SUPPLEMENTAL_PUNCTUATION: Block = Block::new(0x2E00, 0x2E7F, "SUPPLEMENTAL_PUNCTUATION");
pub const CJK_RADICALS_SUPPLEMENT: Block = Block::new(0x2E80, 0x2EFF, "CJK_RADICALS_SUPPLEMENT");
pub const KANGXI_RADICALS: Block = Block::new(0x2F00, 0x2FDF, "KANGXI_RADICALS");
pub const IDEOGRAPHIC_DESCRIPTION_CHARACTERS: Block = Block::new(0x2FF0, 0x2FFF, "IDEOGRAPHIC_DESCRIPTION_CHARACTERS");
pub const CJK_SYMBOLS_AND_PUNCTUATION: Block = Block::new(0x3000, 0x303F, "CJK_SYMBOLS_AND_PUNCTUATION");
pub const HIRAGANA: Block = Block::new(0x3040, 0x309F, "HIRAGANA");
pub const KATAKANA: Block = Block::new(0x30A0, 0x30FF, "KATAKANA");
pub const BOPOMOFO: Block = Block::new(0x3100, 0x312F, "BOPOMOFO");
pub const HANGUL_COMPATIBILITY_JAMO: Block = Block::new(0x3130, 0x318F, "HANGUL_COMPATIBILITY_JAMO");
pub const KANBUN: Block = Block::new(0x3190, 0x319F, "KANBUN");
pub const BOPOMOFO_EXTENDED: Block = Block::new(0x31A0, 0x31BF, "BOPOMOFO_EXTENDED");
pub const CJK_STROKES: Block = Block::new(0x31C0, 0x31EF, "CJK_STROKES");
pub const KATAKANA_PHONETIC_EXTENSIONS: Block = Block::new(0x31F0, 0x31FF, "KATAKANA_PHONETIC_EXTENSIONS");
pub const ENCLOSED_CJK_LETTERS_AND_MONTHS: Block = Block::new(0x3200, 0x32FF, "ENCLOSED_CJK_LETTERS_AND_MONTHS");
pub const CJK_COMPATIBILITY: Block = Block::new(0x3300, 0x33FF, "CJK_COMPATIBILITY");
pub const CJK_UNIFIED_IDEOGRAPHS_EXTENSION_A: Block = Block::new(0x3400, 0x4DBF, "CJK_UNIFIED_IDEOGRAPHS_EXTENSION_A");
pub const YIJING_HEXAGRAM_SYMBOLS: Block = Block::new(0x4DC0, 0x4DFF, "YIJING_HEXAGRAM_SYMBOLS");
pub const CJK_UNIFIED_IDEOGRAPHS: Block = Block::new(0x4E00, 0x9FFF, "CJK_UNIFIED_IDEOGRAPHS");
pub const YI_SYLLABLES: Block = Block::new(0xA000, 0xA48F, "YI_SYLLABLES");
pub const YI_RADICALS: Block = Block::new(0xA490, 0xA4CF, "YI_RADICALS");
pub const LISU: Block = Block::new(0xA4D0, 0xA4FF, "LISU");
pub const VAI: Block = Block::new(0xA500, 0xA63F, "VAI");
pub const CYRILLIC_EXTENDED_B: Block = Block::new(0xA640, 0xA69F, "CYRILLIC_EXTENDED_B");
pub const BAMUM: Block = Block::new(0xA6A0, 0xA6FF, "BAMUM");
pub const MODIFIER_TONE_LETTERS: Block = Block::new(0xA700, 0xA71F, "MODIFIER_TONE_LETTERS");
pub const LATIN_EXTENDED_D: Block = Block::new(0xA720, 0xA7FF, "LATIN_EXTENDED_D");
pub const SYLOTI_NAGRI: Block = Block::new(0xA800, 0xA82F, "SYLOTI_NAGRI");
pub const COMMON_INDIC_NUMBER_FORMS: Block = Block::new(0xA830, 0xA83F, "COMMON_INDIC_NUMBER_FORMS");
pub const PHAGS_PA: Block = Block::new(0xA840, 0xA87F, "PHAGS_PA");
pub const SAURASHTRA: Block = Block::new(0xA880, 0xA8DF, "SAURASHTRA");
pub const DEVANAGARI_EXTENDED: Block = Block::new(0xA8E0, 0xA8FF, "DEVANAGARI_EXTENDED");
pub const KAYAH_LI: Block = Block::new(0xA900, 0xA92F, "KAYAH_LI");
pub const REJANG: Block = Block::new(0xA930, 0xA95F, "REJANG");
pub const HANGUL_JAMO_EXTENDED_A: Block = Block::new(0xA960, 0xA97F, "HANGUL_JAMO_EXTENDED_A");
pub const JAVANESE: Block = Block::new(0xA980, 0xA9DF, "JAVANESE");
pub const MYANMAR_EXTENDED_B: Block = Block::new(0xA9E0, 0xA9FF, "MYANMAR_EXTENDED_B");
pub const CHAM: Block = Block::new(0xAA00, 0xAA5F, "CHAM");
pub const MYANMAR_EXTENDED_A: Block = Block::new(0xAA60, 0xAA7F, "MYANMAR_EXTENDED_A");
pub const TAI_VIET: Block = Block::new(0xAA80, 0xAADF, "TAI_VIET");
pub const MEETEI_MAYEK_EXTENSIONS: Block = Block::new(0xAAE0, 0xAAFF, "MEETEI_MAYEK_EXTENSIONS");
pub const ETHIOPIC_EXTENDED_A: Block = Block::new(0xAB00, 0xAB2F, "ETHIOPIC_EXTENDED_A");
pub const LATIN_EXTENDED_E: Block = Block::new(0xAB30, 0xAB6F, "LATIN_EXTENDED_E");
pub const CHEROKEE_SUPPLEMENT: Block = Block::new(0xAB70, 0xABBF, "CHEROKEE_SUPPLEMENT");
pub const MEETEI_MAYEK: Block = Block::new(0xABC0, 0xABFF, "MEETEI_MAYEK");
pub const HANGUL_SYLLABLES: Block = Block::new(0xAC00, 0xD7AF, "HANGUL_SYLLABLES");
pub const HANGUL_JAMO_EXTENDED_B: Block = Block::new(0xD7B0, 0xD7FF, "HANGUL_JAMO_EXTENDED_B");
pub const HIGH_SURROGATES: Block = Block::new(0xD800, 0xDB7F, "HIGH_SURROGATES");
pub const HIGH_PRIVATE_USE_SURROGATES: Block = Block::new(0xDB80, 0xDBFF, "HIGH_PRIVATE_USE_SURROGATES");
pub const LOW_SURROGATES: Block = Block::new(0xDC00, 0xDFFF, "LOW_SURROGATES");
pub const PRIVATE_USE_AREA: Block = Block::new(0xE000, 0xF8FF, "PRIVATE_USE_AREA");
pub const CJK_COMPATIBILITY_IDEOGRAPHS: Block = Block::new(0xF900, 0xFAFF, "CJK_COMPATIBILITY_IDEOGRAPHS");
pub const ALPHABETIC_PRESENTATION_FORMS: Block = Block::new(0xFB00, 0xFB4F, "ALPHABETIC_PRESENTATION_FORMS");
pub const ARABIC_PRESENTATION_FORMS_A: Block = Block::new(0xFB50, 0xFDFF, "ARABIC_PRESENTATION_FORMS_A");
pub const VARIATION_SELECTORS: Block = Block::new(0xFE00, 0xFE0F, "VARIATION_SELECTORS");
pub const VERTICAL_FORMS: Block = Block::new(0xFE10, 0xFE1F, "VERTICAL_FORMS");
pub const COMBINING_HALF_MARKS: Block = Block::new(0xFE20, 0xFE2F, "COMBINING_HALF_MARKS");
pub const CJK_COMPATIBILITY_FORMS: Block = Block::new(0xFE30, 0xFE4F, "CJK_COMPATIBILITY_FORMS");
pub const SMALL_FORM_VARIANTS: Block = Block::new(0xFE50, 0xFE6F, "SMALL_FORM_VARIANTS");
pub const ARABIC_PRESENTATION_FORMS_B: Block = Block::new(0xFE70, 0xFEFF, "ARABIC_PRESENTATION_FORMS_B");
pub const HALFWIDTH_AND_FULLWIDTH_FORMS: Block = Block::new(0xFF00, 0xFFEF, "HALFWIDTH_AND_FULLWIDTH_FORMS");
pub const SPECIALS: Block = Block::new(0xFFF0, 0xFFFF, "SPECIALS");
pub const LINEAR_B_SYLLABARY: Block = Block::new(0x10000, 0x1007F, "LINEAR_B_SYLLABARY");
pub const LINEAR_B_IDEOGRAMS: Block = Block::new(0x10080, 0x100FF, "LINEAR_B_IDEOGRAMS");
pub const AEGEAN_NUMBERS: Block = Block::new(0x10100, 0x1013F, "AEGEAN_NUMBERS");
pub const ANCIENT_GREEK_NUMBERS: Block = Block::new(0x10140, 0x1018F, "ANCIENT_GREEK_NUMBERS");
pub const ANCIENT_SYMBOLS: Block = Block::new(0x10190, 0x101CF, "ANCIENT_SYMBOLS");
pub const PHAISTOS_DISC: Block = Block::new(0x101D0, 0x101FF, "PHAISTOS_DISC");
pub const LYCIAN: Block = Block::new(0x10280, 0x1029F, "LYCIAN");
pub const CARIAN: Block = Block::new(0x102A0, 0x102DF, "CARIAN");
pub const COPTIC_EPACT_NUMBERS: Block = Block::new(0x102E0, 0x102FF, "COPTIC_EPACT_NUMBERS");
pub const OLD_ITALIC: Block = Block::new(0x10300, 0x1032F, "OLD_ITALIC");
pub const GOTHIC: Block = Block::new(0x10330, 0x1034F, "GOTHIC");
pub const OLD_PERMIC: Block = Block::new(0x10350, 0x1037F, "OLD_PERMIC");
pub const UGARITIC: Block = Block::new(0x10380, 0x1039F, "UGARITIC");
pub const OLD_PERSIAN: Block = Block::new(0x103A0, 0x103DF, "OLD_PERSIAN");
pub const DESERET: Block = Block::new(0x10400, 0x1044F, "DESERET");
pub const SHAVIAN: Block = Block::new(0x10450, 0x1047F, "SHAVIAN");
pub const OSMANYA: Block = Block::new(0x10480, 0x104AF, "OSMANYA");
pub const OSAGE: Block = Block::new(0x104B0, 0x104FF, "OSAGE");
pub const ELBASAN: Block = Block::new(0x10500, 0x1052F, "ELBASAN");
pub const CAUCASIAN_ALBANIAN: Block = Block::new(0x10530, 0x1056F, "CAUCASIAN_ALBANIAN");
pub const LINEAR_A: Block = Block::new(0x10600, 0x1077F, "LINEAR_A");
pub const CYPRIOT_SYLLABARY: Block = Block::new(0x10800, 0x1083F, "CYPRIOT_SYLLABARY");
pub const IMPERIAL_ARAMAIC: Block = Block::new(0x10840, 0x1085F, "IMPERIAL_ARAMAIC");
pub const PALMYRENE: Block = Block::new(0x10860, 0x1087F, "PALMYRENE");
pub const NABATAEAN: Block = Block::new(0x10880, 0x108AF, "NABATAEAN");
pub const HATRAN: Block = Block::new(0x108E0, 0x108FF, "HATRAN");
pub const PHOENICIAN: Block = Block::new(0x10900, 0x1091F, "PHOENICIAN");
pub const LYDIAN: Block = Block::new(0x10920, 0x1093F, "LYDIAN");
pub const MEROITIC_HIEROGLYPHS: Block = Block::new(0x10980, 0x1099F, "MEROITIC_HIEROGLYPHS");
pub const MEROITIC_CURSIVE: Block = Block::new(0x109A0, 0x109FF, "MEROITIC_CURSIVE");
pub const KHAROSHTHI: Block = Block::new(0x10A00, 0x10A5F, "KHAROSHTHI");
pub const OLD_SOUTH_ARABIAN: Block = Block::new(0x10A60, 0x10A7F, "OLD_SOUTH_ARABIAN");
pub const OLD_NORTH_ARABIAN: Block = Block::new(0x10A80, 0x10A9F, "OLD_NORTH_ARABIAN");
pub const MANICHAEAN: Block = Block::new(0x10AC0, 0x10AFF, "MANICHAEAN");
pub const AVESTAN: Block = Block::new(0x10B00, 0x10B3F, "AVESTAN");
pub const INSCRIPTIONAL_PARTHIAN: Block = Block::new(0x10B40, 0x10B5F, "INSCRIPTIONAL_PARTHIAN");
pub const INSCRIPTIONAL_PAHLAVI: Block = Block::new(0x10B60, 0x10B7F, "INSCRIPTIONAL_PAHLAVI");
pub const PSALTER_PAHLAVI: Block = Block::new(0x10B80, 0x10BAF, "PSALTER_PAHLAVI");
pub const OLD_TURKIC: Block = Block::new(0x10C00, 0x10C4F, "OLD_TURKIC");
pub const OLD_HUNGARIAN: Block = Block::new(0x10C80, 0x10CFF, "OLD_HUNGARIAN");
pub const HANIFI_ROHINGYA: Block = Block::new(0x10D00, 0x10D3F, "HANIFI_ROHINGYA");
pub const RUMI_NUMERAL_SYMBOLS: Block = Block::new(0x10E60, 0x10E7F, "RUMI_NUMERAL_SYMBOLS");
pub const OLD_SOGDIAN: Block = Block::new(0x10F00, 0x10F2F, "OLD_SOGDIAN");
pub const SOGDIAN: Block = Block::new(0x10F30, 0x10F6F, "SOGDIAN");
pub const ELYMAIC: Block = Block::new(0x10FE0, 0x10FFF, "ELYMAIC");
pub const BRAHMI: Block = Block::new(0x11000, 0x1107F, "BRAHMI");
pub const KAITHI: Block = Block::new(0x11080, 0x110CF, "KAITHI");
pub const SORA_SOMPENG: Block = Block::new(0x110D0, 0x110FF, "SORA_SOMPENG");
pub const CHAKMA: Block = Block::new(0x11100, 0x1114F, "CHAKMA");
pub const MAHAJANI: Block = Block::new(0x11150, 0x1117F, "MAHAJANI");
pub const SHARADA: Block = Block::new(0x11180, 0x111DF, "SHARADA");
pub const SINHALA_ARCHAIC_NUMBERS: Block = Block::new(0x111E0, 0x111FF, "SINHALA_ARCHAIC_NUMBERS");
pub const KHOJKI: Block = Block::new(0x11200, 0x1124F, "KHOJKI");
pub const MULTANI: Block = Block::new(0x11280, 0x112AF, "MULTANI");
pub const KHUDAWADI: Block = Block::new(0x112B0, 0x112FF, "KHUDAWADI");
pub const GRANTHA: Block = Block::new(0x11300, 0x1137F, "GRANTHA");
pub const NEWA: Block = Block::new(0x11400, 0x1147F, "NEWA");
pub const TIRHUTA: Block = Block::new(0x11480, 0x114DF, "TIRHUTA");
pub const SIDDHAM: Block = Block::new(0x11580, 0x115FF, "SIDDHAM");
pub const MODI: Block = Block::new(0x11600, 0x1165F, "MODI");
pub const MONGOLIAN_SUPPLEMENT: Block = Block::new(0x11660, 0x1167F, "MONGOLIAN_SUPPLEMENT");
pub const TAKRI: Block = Block::new(0x11680, 0x116CF, "TAKRI");
pub const AHOM: Block = Block::new(0x11700, 0x1173F, "AHOM");
pub const DOGRA: Block = Block::new(0x11800, 0x1184F, "DOGRA");
pub const WARANG_CITI: Block = Block::new(0x118A0, 0x118FF, "WARANG_CITI");
pub const NANDINAGARI: Block = Block::new(0x119A0, 0x119FF, "NANDINAGARI");
pub const ZANABAZAR_SQUARE: Block = Block::new(0x11A00, 0x11A4F, "ZANABAZAR_SQUARE");
pub const SOYOMBO: Block = Block::new(0x11A50, 0x11AAF, "SOYOMBO");
pub const PAU_CIN_HAU: Block = Block::new(0x11AC0, 0x11AFF, "PAU_CIN_HAU");
pub const BHAIKSUKI: Block = Block::new(0x11C00, 0x11C6F, "BHAIKSUKI");
pub const MARCHEN: Block = Block::new(0x11C70, 0x11CBF, "MARCHEN");
pub const MASARAM_GONDI: Block = Block::new(0x11D00, 0x11D5F, "MASARAM_GONDI");
pub const GUNJALA_GONDI: Block = Block::new(0x11D60, 0x11DAF, "GUNJALA_GONDI");
pub const MAKASAR: Block = Block::new(0x11EE0, 0x11EFF, "MAKASAR");
pub const TAMIL_SUPPLEMENT: Block = Block::new(0x11FC0, 0x11FFF, "TAMIL_SUPPLEMENT");
pub const CUNEIFORM: Block = Block::new(0x12000, 0x123FF, "CUNEIFORM");
pub const CUNEIFORM_NUMBERS_AND_PUNCTUATION: Block = Block::new(0x12400, 0x1247F, "CUNEIFORM_NUMBERS_AND_PUNCTUATION");
pub const EARLY_DYNASTIC_CUNEIFORM: Block = Block::new(0x12480, 0x1254F, "EARLY_DYNASTIC_CUNEIFORM");
pub const EGYPTIAN_HIEROGLYPHS: Block = Block::new(0x13000, 0x1342F, "EGYPTIAN_HIEROGLYPHS");
pub const EGYPTIAN_HIEROGLYPH_FORMAT_CONTROLS: Block = Block::new(0x13430, 0x1343F, "EGYPTIAN_HIEROGLYPH_FORMAT_CONTROLS");
pub const ANATOLIAN_HIEROGLYPHS: Block = Block::new(0x14400, 0x1467F, "ANATOLIAN_HIEROGLYPHS");
pub const BAMUM_SUPPLEMENT: Block = Block::new(0x16800, 0x16A3F, "BAMUM_SUPPLEMENT");
pub const MRO: Block = Block::new(0x16A40, 0x16A6F, "MRO");
pub const BASSA_VAH: Block = Block::new(0x16AD0, 0x16AFF, "BASSA_VAH");
pub const PAHAWH_HMONG: Block = Block::new(0x16B00, 0x16B8F, "PAHAWH_HMONG");
pub const MEDEFAIDRIN: Block = Block::new(0x16E40, 0x16E9F, "MEDEFAIDRIN");
pub const MIAO: Block = Block::new(0x16F00, 0x16F9F, "MIAO");
pub const IDEOGRAPHIC_SYMBOLS_AND_PUNCTUATION: Block = Block::new(0x16FE0, 0x16FFF, "IDEOGRAPHIC_SYMBOLS_AND_PUNCTUATION");
pub const TANGUT: Block = Block::new(0x17000, 0x187FF, "TANGUT");
pub const TANGUT_COMPONENTS: Block = Block::new(0x18800, 0x18AFF, "TANGUT_COMPONENTS");
pub const KANA_SUPPLEMENT: Block = Block::new(0x1B000, 0x1B0FF, "KANA_SUPPLEMENT");
pub const KANA_EXTENDED_A: Block = Block::new(0x1B100, 0x1B12F, "KANA_EXTENDED_A");
pub const SMALL_KANA_EXTENSION: Block = Block::new(0x1B130, 0x1B16F, "SMALL_KANA_EXTENSION");
pub const NUSHU: Block = Block::new(0x1B170, 0x1B2FF, "NUSHU");
pub const DUPLOYAN: Block = Block::new(0x1BC00, 0x1BC9F, "DUPLOYAN");
pub const SHORTHAND_FORMAT_CONTROLS: Block = Block::new(0x1BCA0, 0x1BCAF, "SHORTHAND_FORMAT_CONTROLS");
pub const BYZANTINE_MUSICAL_SYMBOLS: Block = Block::new(0x1D000, 0x1D0FF, "BYZANTINE_MUSICAL_SYMBOLS");
pub const MUSICAL_SYMBOLS: Block = Block::new(0x1D100, 0x1D1FF, "MUSICAL_SYMBOLS");
pub const ANCIENT_GREEK_MUSICAL_NOTATION: Block = Block::new(0x1D200, 0x1D24F, "ANCIENT_GREEK_MUSICAL_NOTATION");
pub const MAYAN_NUMERALS: Block = Block::new(0x1D2E0, 0x1D2FF, "MAYAN_NUMERALS");
pub const TAI_XUAN_JING_SYMBOLS: Block = Block::new(0x1D300, 0x1D35F, "TAI_XUAN_JING_SYMBOLS");
pub const COUNTING_ROD_NUMERALS: Block = Block::new(0x1D360, 0x1D37F, "COUNTING_ROD_NUMERALS");
pub const MATHEMATICAL_ALPHANUMERIC_SYMBOLS: Block = Block::new(0x1D400, 0x1D7FF, "MATHEMATICAL_ALPHANUMERIC_SYMBOLS");
pub const SUTTON_SIGNWRITING: Block = Block::new(0x1D800, 0x1DAAF, "SUTTON_SIGNWRITING");
pub const GLAGOLITIC_SUPPLEMENT: Block = Block::new(0x1E000, 0x1E02F, "GLAGOLITIC_SUPPLEMENT");
pub const NYIAKENG_PUACHUE_HMONG: Block = Block::new(0x1E100, 0x1E14F, "NYIAKENG_PUACHUE_HMONG");
pub const WANCHO: Block = Block::new(0x1E2C0, 0x1E2FF, "WANCHO");
pub const MENDE_KIKAKUI: Block = Block::new(0x1E800, 0x1E8DF, "MENDE_KIKAKUI");
pub const ADLAM: Block = Block::new(0x1E900, 0x1E95F, "ADLAM");
pub const INDIC_SIYAQ_NUMBERS: Block = Block::new(0x1EC70, 0x1ECBF, "INDIC_SIYAQ_NUMBERS");
pub const OTTOMAN_SIYAQ_NUMBERS: Block = Block::new(0x1ED00, 0x1ED4F, "OTTOMAN_SIYAQ_NUMBERS");
pub const ARABIC_MATHEMATICAL_ALPHABETIC_SYMBOLS: Block = Block::new(0x1EE00, 0x1EEFF, "ARABIC_MATHEMATICAL_ALPHABETIC_SYMBOLS");
pub const MAHJONG_TILES: Block = Block::new(0x1F000, 0x1F02F, "MAHJONG_TILES");
pub const DOMINO_TILES: Block = Block::new(0x1F030, 0x1F09F, "DOMINO_TILES");
pub const PLAYING_CARDS: Block = Block::new(0x1F0A0, 0x1F0FF, "PLAYING_CARDS");
pub const ENCLOSED_ALPHANUMERIC_SUPPLEMENT: Block = Block::new(0x1F100, 0x1F1FF, "ENCLOSED_ALPHANUMERIC_SUPPLEMENT");
pub const ENCLOSED_IDEOGRAPHIC_SUPPLEMENT: Block = Block::new(0x1F200, 0x1F2FF, "ENCLOSED_IDEOGRAPHIC_SUPPLEMENT");
pub const MISCELLANEOUS_SYMBOLS_AND_PICTOGRAPHS: Block = Block::new(0x1F300, 0x1F5FF, "MISCELLANEOUS_SYMBOLS_AND_PICTOGRAPHS");
pub const EMOTICONS: Block = Block::new(0x1F600, 0x1F64F, "EMOTICONS");
pub const ORNAMENTAL_DINGBATS: Block = Block::new(0x1F650, 0x1F67F, "ORNAMENTAL_DINGBATS");
pub const TRANSPORT_AND_MAP_SYMBOLS: Block = Block::new(0x1F680, 0x1F6FF, "TRANSPORT_AND_MAP_SYMBOLS");
pub const ALCHEMICAL_SYMBOLS: Block = Block::new(0x1F700, 0x1F77F, "ALCHEMICAL_SYMBOLS");
pub const GEOMETRIC_SHAPES_EXTENDED: Block = Block::new(0x1F780, 0x1F7FF, "GEOMETRIC_SHAPES_EXTENDED");
pub const SUPPLEMENTAL_ARROWS_C: Block = Block::new(0x1F800, 0x1F8FF, "SUPPLEMENTAL_ARROWS_C");
pub const SUPPLEMENTAL_SYMBOLS_AND_PICTOGRAPHS: Block = Block::new(0x1F900, 0x1F9FF, "SUPPLEMENTAL_SYMBOLS_AND_PICTOGRAPHS");
pub const CHESS_SYMBOLS: Block = Block::new(0x1FA00, 0x1FA6F, "CHESS_SYMBOLS");
pub const SYMBOLS_AND_PICTOGRAPHS_EXTENDED_A: Block = Block::new(0x1FA70, 0x1FAFF, "SYMBOLS_AND_PICTOGRAPHS_EXTENDED_A");
pub const CJK_UNIFIED_IDEOGRAPHS_EXTENSION_B: Block = Block::new(0x20000, 0x2A6DF, "CJK_UNIFIED_IDEOGRAPHS_EXTENSION_B");
pub const CJK_UNIFIED_IDEOGRAPHS_EXTENSION_C: Block = Block::new(0x2A700, 0x2B73F, "CJK_UNIFIED_IDEOGRAPHS_EXTENSION_C");
pub const CJK_UNIFIED_IDEOGRAPHS_EXTENSION_D: Block = Block::new(0x2B740, 0x2B81F, "CJK_UNIFIED_IDEOGRAPHS_EXTENSION_D");
pub const CJK_UNIFIED_IDEOGRAPHS_EXTENSION_E: Block = Block::new(0x2B820, 0x2CEAF, "CJK_UNIFIED_IDEOGRAPHS_EXTENSION_E");
pub const CJK_UNIFIED_IDEOGRAPHS_EXTENSION_F: Block = Block::new(0x2CEB0, 0x2EBEF, "CJK_UNIFIED_IDEOGRAPHS_EXTENSION_F");
pub const CJK_COMPATIBILITY_IDEOGRAPHS_SUPPLEMENT: Block = Block::new(0x2F800, 0x2FA1F, "CJK_COMPATIBILITY_IDEOGRAPHS_SUPPLEMENT");
pub const TAGS: Block = Block::new(0xE0000, 0xE007F, "TAGS");
pub const VARIATION_SELECTORS_SUPPLEMENT: Block = Block::new(0xE0100, 0xE01EF, "VARIATION_SELECTORS_SUPPLEMENT");
pub const SUPPLEMENTARY_PRIVATE_USE_AREA_A: Block = Block::new(0xF0000, 0xFFFFF, "SUPPLEMENTARY_PRIVATE_USE_AREA_A");
pub const SUPPLEMENTARY_PRIVATE_USE_AREA_B: Block = Block::new(0x100000, 0x10FFFF, "SUPPLEMENTARY_PRIVATE_USE_AREA_B");

/// Every block, sorted by first code point.
pub static BLOCKS: [Block; 300] = [
    BASIC_LATIN,
    LATIN_1_SUPPLEMENT,
    LATIN_EXTENDED_A,
    LATIN_EXTENDED_B,
    IPA_EXTENSIONS,
    SPACING_MODIFIER_LETTERS,
    COMBINING_DIACRITICAL_MARKS,
    GREEK_AND_COPTIC,
    CYRILLIC,
    CYRILLIC_SUPPLEMENT,
    ARMENIAN,
    HEBREW,
    ARABIC,
    SYRIAC,
    ARABIC_SUPPLEMENT,
    THAANA,
    NKO,
    SAMARITAN,
    MANDAIC,
    SYRIAC_SUPPLEMENT,
    ARABIC_EXTENDED_A,
    DEVANAGARI,
    BENGALI,
    GURMUKHI,
    GUJARATI,
    ORIYA,
    TAMIL,
    TELUGU,
    KANNADA,
    MALAYALAM,
    SINHALA,
    THAI,
    LAO,
    TIBETAN,
    MYANMAR,
    GEORGIAN,
    HANGUL_JAMO,
    ETHIOPIC,
    ETHIOPIC_SUPPLEMENT,
    CHEROKEE,
    UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS,
    OGHAM,
    RUNIC,
    TAGALOG,
    HANUNOO,
    BUHID,
    TAGBANWA,
    KHMER,
    MONGOLIAN,
    UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS_EXTENDED,
    LIMBU,
    TAI_LE,
    NEW_TAI_LUE,
    KHMER_SYMBOLS,
    BUGINESE,
    TAI_THAM,
    COMBINING_DIACRITICAL_MARKS_EXTENDED,
    BALINESE,
    SUNDANESE,
    BATAK,
    LEPCHA,
    OL_CHIKI,
    CYRILLIC_EXTENDED_C,
    GEORGIAN_EXTENDED,
    SUNDANESE_SUPPLEMENT,
    VEDIC_EXTENSIONS,
    PHONETIC_EXTENSIONS,
    PHONETIC_EXTENSIONS_SUPPLEMENT,
    COMBINING_DIACRITICAL_MARKS_SUPPLEMENT,
    LATIN_EXTENDED_ADDITIONAL,
    GREEK_EXTENDED,
    GENERAL_PUNCTUATION,
    SUPERSCRIPTS_AND_SUBSCRIPTS,
    CURRENCY_SYMBOLS,
    COMBINING_DIACRITICAL_MARKS_FOR_SYMBOLS,
    LETTERLIKE_SYMBOLS,
    NUMBER_FORMS,
    ARROWS,
    MATHEMATICAL_OPERATORS,
    MISCELLANEOUS_TECHNICAL,
    CONTROL_PICTURES,
    OPTICAL_CHARACTER_RECOGNITION,
    ENCLOSED_ALPHANUMERICS,
    BOX_DRAWING,
    BLOCK_ELEMENTS,
    GEOMETRIC_SHAPES,
    MISCELLANEOUS_SYMBOLS,
    DINGBATS,
    MISCELLANEOUS_MATHEMATICAL_SYMBOLS_A,
    SUPPLEMENTAL_ARROWS_A,
    BRAILLE_PATTERNS,
    SUPPLEMENTAL_ARROWS_B,
    MISCELLANEOUS_MATHEMATICAL_SYMBOLS_B,
    SUPPLEMENTAL_MATHEMATICAL_OPERATORS,
    MISCELLANEOUS_SYMBOLS_AND_ARROWS,
    GLAGOLITIC,
    LATIN_EXTENDED_C,
    COPTIC,
    GEORGIAN_SUPPLEMENT,
    TIFINAGH,
    ETHIOPIC_EXTENDED,
    CYRILLIC_EXTENDED_A,
    SUPPLEMENTAL_PUNCTUATION,
    CJK_RADICALS_SUPPLEMENT,
    KANGXI_RADICALS,
    IDEOGRAPHIC_DESCRIPTION_CHARACTERS,
    CJK_SYMBOLS_AND_PUNCTUATION,
    HIRAGANA,
    KATAKANA,
    BOPOMOFO,
    HANGUL_COMPATIBILITY_JAMO,
    KANBUN,
    BOPOMOFO_EXTENDED,
    CJK_STROKES,
    KATAKANA_PHONETIC_EXTENSIONS,
    ENCLOSED_CJK_LETTERS_AND_MONTHS,
    CJK_COMPATIBILITY,
    CJK_UNIFIED_IDEOGRAPHS_EXTENSION_A,
    YIJING_HEXAGRAM_SYMBOLS,
    CJK_UNIFIED_IDEOGRAPHS,
    YI_SYLLABLES,
    YI_RADICALS,
    LISU,
    VAI,
    CYRILLIC_EXTENDED_B,
    BAMUM,
    MODIFIER_TONE_LETTERS,
    LATIN_EXTENDED_D,
    SYLOTI_NAGRI,
    COMMON_INDIC_NUMBER_FORMS,
    PHAGS_PA,
    SAURASHTRA,
    DEVANAGARI_EXTENDED,
    KAYAH_LI,
    REJANG,
    HANGUL_JAMO_EXTENDED_A,
    JAVANESE,
    MYANMAR_EXTENDED_B,
    CHAM,
    MYANMAR_EXTENDED_A,
    TAI_VIET,
    MEETEI_MAYEK_EXTENSIONS,
    ETHIOPIC_EXTENDED_A,
    LATIN_EXTENDED_E,
    CHEROKEE_SUPPLEMENT,
    MEETEI_MAYEK,
    HANGUL_SYLLABLES,
    HANGUL_JAMO_EXTENDED_B,
    HIGH_SURROGATES,
    HIGH_PRIVATE_USE_SURROGATES,
    LOW_SURROGATES,
    PRIVATE_USE_AREA,
    CJK_COMPATIBILITY_IDEOGRAPHS,
    ALPHABETIC_PRESENTATION_FORMS,
    ARABIC_PRESENTATION_FORMS_A,
    VARIATION_SELECTORS,
    VERTICAL_FORMS,
    COMBINING_HALF_MARKS,
    CJK_COMPATIBILITY_FORMS,
    SMALL_FORM_VARIANTS,
    ARABIC_PRESENTATION_FORMS_B,
    HALFWIDTH_AND_FULLWIDTH_FORMS,
    SPECIALS,
    LINEAR_B_SYLLABARY,
    LINEAR_B_IDEOGRAMS,
    AEGEAN_NUMBERS,
    ANCIENT_GREEK_NUMBERS,
    ANCIENT_SYMBOLS,
    PHAISTOS_DISC,
    LYCIAN,
    CARIAN,
    COPTIC_EPACT_NUMBERS,
    OLD_ITALIC,
    GOTHIC,
    OLD_PERMIC,
    UGARITIC,
    OLD_PERSIAN,
    DESERET,
    SHAVIAN,
    OSMANYA,
    OSAGE,
    ELBASAN,
    CAUCASIAN_ALBANIAN,
    LINEAR_A,
    CYPRIOT_SYLLABARY,
    IMPERIAL_ARAMAIC,
    PALMYRENE,
    NABATAEAN,
    HATRAN,
    PHOENICIAN,
    LYDIAN,
    MEROITIC_HIEROGLYPHS,
    MEROITIC_CURSIVE,
    KHAROSHTHI,
    OLD_SOUTH_ARABIAN,
    OLD_NORTH_ARABIAN,
    MANICHAEAN,
    AVESTAN,
    INSCRIPTIONAL_PARTHIAN,
    INSCRIPTIONAL_PAHLAVI,
    PSALTER_PAHLAVI,
    OLD_TURKIC,
    OLD_HUNGARIAN,
    HANIFI_ROHINGYA,
    RUMI_NUMERAL_SYMBOLS,
    OLD_SOGDIAN,
    SOGDIAN,
    ELYMAIC,
    BRAHMI,
    KAITHI,
    SORA_SOMPENG,
    CHAKMA,
    MAHAJANI,
    SHARADA,
    SINHALA_ARCHAIC_NUMBERS,
    KHOJKI,
    MULTANI,
    KHUDAWADI,
    GRANTHA,
    NEWA,
    TIRHUTA,
    SIDDHAM,
    MODI,
    MONGOLIAN_SUPPLEMENT,
    TAKRI,
    AHOM,
    DOGRA,
    WARANG_CITI,
    NANDINAGARI,
    ZANABAZAR_SQUARE,
    SOYOMBO,
    PAU_CIN_HAU,
    BHAIKSUKI,
    MARCHEN,
    MASARAM_GONDI,
    GUNJALA_GONDI,
    MAKASAR,
    TAMIL_SUPPLEMENT,
    CUNEIFORM,
    CUNEIFORM_NUMBERS_AND_PUNCTUATION,
    EARLY_DYNASTIC_CUNEIFORM,
    EGYPTIAN_HIEROGLYPHS,
    EGYPTIAN_HIEROGLYPH_FORMAT_CONTROLS,
    ANATOLIAN_HIEROGLYPHS,
    BAMUM_SUPPLEMENT,
    MRO,
    BASSA_VAH,
    PAHAWH_HMONG,
    MEDEFAIDRIN,
    MIAO,
    IDEOGRAPHIC_SYMBOLS_AND_PUNCTUATION,
    TANGUT,
    TANGUT_COMPONENTS,
    KANA_SUPPLEMENT,
    KANA_EXTENDED_A,
    SMALL_KANA_EXTENSION,
    NUSHU,
    DUPLOYAN,
    SHORTHAND_FORMAT_CONTROLS,
    BYZANTINE_MUSICAL_SYMBOLS,
    MUSICAL_SYMBOLS,
    ANCIENT_GREEK_MUSICAL_NOTATION,
    MAYAN_NUMERALS,
    TAI_XUAN_JING_SYMBOLS,
    COUNTING_ROD_NUMERALS,
    MATHEMATICAL_ALPHANUMERIC_SYMBOLS,
    SUTTON_SIGNWRITING,
    GLAGOLITIC_SUPPLEMENT,
    NYIAKENG_PUACHUE_HMONG,
    WANCHO,
    MENDE_KIKAKUI,
    ADLAM,
    INDIC_SIYAQ_NUMBERS,
    OTTOMAN_SIYAQ_NUMBERS,
    ARABIC_MATHEMATICAL_ALPHABETIC_SYMBOLS,
    MAHJONG_TILES,
    DOMINO_TILES,
    PLAYING_CARDS,
    ENCLOSED_ALPHANUMERIC_SUPPLEMENT,
    ENCLOSED_IDEOGRAPHIC_SUPPLEMENT,
    MISCELLANEOUS_SYMBOLS_AND_PICTOGRAPHS,
    EMOTICONS,
    ORNAMENTAL_DINGBATS,
    TRANSPORT_AND_MAP_SYMBOLS,
    ALCHEMICAL_SYMBOLS,
    GEOMETRIC_SHAPES_EXTENDED,
    SUPPLEMENTAL_ARROWS_C,
    SUPPLEMENTAL_SYMBOLS_AND_PICTOGRAPHS,
    CHESS_SYMBOLS,
    SYMBOLS_AND_PICTOGRAPHS_EXTENDED_A,
    CJK_UNIFIED_IDEOGRAPHS_EXTENSION_B,
    CJK_UNIFIED_IDEOGRAPHS_EXTENSION_C,
    CJK_UNIFIED_IDEOGRAPHS_EXTENSION_D,
    CJK_UNIFIED_IDEOGRAPHS_EXTENSION_E,
    CJK_UNIFIED_IDEOGRAPHS_EXTENSION_F,
    CJK_COMPATIBILITY_IDEOGRAPHS_SUPPLEMENT,
    TAGS,
    VARIATION_SELECTORS_SUPPLEMENT,
    SUPPLEMENTARY_PRIVATE_USE_AREA_A,
    SUPPLEMENTARY_PRIVATE_USE_AREA_B,
];

/// Printable ASCII, the whole Latin-1 Supplement (C1 controls included) and
/// the Latin Extended letters and symbols used by Western and Central
/// European text. Sorted ascending.
pub static STANDARD_CHARSET: [char; 323] = [
    '\u{0020}', '\u{0021}', '\u{0022}', '\u{0023}', '\u{0024}', '\u{0025}', '\u{0026}', '\u{0027}',
    '\u{0028}', '\u{0029}', '\u{002A}', '\u{002B}', '\u{002C}', '\u{002D}', '\u{002E}', '\u{002F}',
    '\u{0030}', '\u{0031}', '\u{0032}', '\u{0033}', '\u{0034}', '\u{0035}', '\u{0036}', '\u{0037}',
    '\u{0038}', '\u{0039}', '\u{003A}', '\u{003B}', '\u{003C}', '\u{003D}', '\u{003E}', '\u{003F}',
    '\u{0040}', '\u{0041}', '\u{0042}', '\u{0043}', '\u{0044}', '\u{0045}', '\u{0046}', '\u{0047}',
    '\u{0048}', '\u{0049}', '\u{004A}', '\u{004B}', '\u{004C}', '\u{004D}', '\u{004E}', '\u{004F}',
    '\u{0050}', '\u{0051}', '\u{0052}', '\u{0053}', '\u{0054}', '\u{0055}', '\u{0056}', '\u{0057}',
    '\u{0058}', '\u{0059}', '\u{005A}', '\u{005B}', '\u{005C}', '\u{005D}', '\u{005E}', '\u{005F}',
    '\u{0060}', '\u{0061}', '\u{0062}', '\u{0063}', '\u{0064}', '\u{0065}', '\u{0066}', '\u{0067}',
    '\u{0068}', '\u{0069}', '\u{006A}', '\u{006B}', '\u{006C}', '\u{006D}', '\u{006E}', '\u{006F}',
    '\u{0070}', '\u{0071}', '\u{0072}', '\u{0073}', '\u{0074}', '\u{0075}', '\u{0076}', '\u{0077}',
    '\u{0078}', '\u{0079}', '\u{007A}', '\u{007B}', '\u{007C}', '\u{007D}', '\u{007E}', '\u{0080}',
    '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{0085}', '\u{0086}', '\u{0087}', '\u{0088}',
    '\u{0089}', '\u{008A}', '\u{008B}', '\u{008C}', '\u{008D}', '\u{008E}', '\u{008F}', '\u{0090}',
    '\u{0091}', '\u{0092}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0097}', '\u{0098}',
    '\u{0099}', '\u{009A}', '\u{009B}', '\u{009C}', '\u{009D}', '\u{009E}', '\u{009F}', '\u{00A0}',
    '\u{00A1}', '\u{00A2}', '\u{00A3}', '\u{00A4}', '\u{00A5}', '\u{00A6}', '\u{00A7}', '\u{00A8}',
    '\u{00A9}', '\u{00AA}', '\u{00AB}', '\u{00AC}', '\u{00AD}', '\u{00AE}', '\u{00AF}', '\u{00B0}',
    '\u{00B1}', '\u{00B2}', '\u{00B3}', '\u{00B4}', '\u{00B5}', '\u{00B6}', '\u{00B7}', '\u{00B8}',
    '\u{00B9}', '\u{00BA}', '\u{00BB}', '\u{00BC}', '\u{00BD}', '\u{00BE}', '\u{00BF}', '\u{00C0}',
    '\u{00C1}', '\u{00C2}', '\u{00C3}', '\u{00C4}', '\u{00C5}', '\u{00C6}', '\u{00C7}', '\u{00C8}',
    '\u{00C9}', '\u{00CA}', '\u{00CB}', '\u{00CC}', '\u{00CD}', '\u{00CE}', '\u{00CF}', '\u{00D0}',
    '\u{00D1}', '\u{00D2}', '\u{00D3}', '\u{00D4}', '\u{00D5}', '\u{00D6}', '\u{00D7}', '\u{00D8}',
    '\u{00D9}', '\u{00DA}', '\u{00DB}', '\u{00DC}', '\u{00DD}', '\u{00DE}', '\u{00DF}', '\u{00E0}',
    '\u{00E1}', '\u{00E2}', '\u{00E3}', '\u{00E4}', '\u{00E5}', '\u{00E6}', '\u{00E7}', '\u{00E8}',
    '\u{00E9}', '\u{00EA}', '\u{00EB}', '\u{00EC}', '\u{00ED}', '\u{00EE}', '\u{00EF}', '\u{00F0}',
    '\u{00F1}', '\u{00F2}', '\u{00F3}', '\u{00F4}', '\u{00F5}', '\u{00F6}', '\u{00F7}', '\u{00F8}',
    '\u{00F9}', '\u{00FA}', '\u{00FB}', '\u{00FC}', '\u{00FD}', '\u{00FE}', '\u{00FF}', '\u{0102}',
    '\u{0103}', '\u{0104}', '\u{0105}', '\u{0106}', '\u{0107}', '\u{010C}', '\u{010D}', '\u{010E}',
    '\u{010F}', '\u{0110}', '\u{0111}', '\u{0118}', '\u{0119}', '\u{011A}', '\u{011B}', '\u{0131}',
    '\u{0139}', '\u{013A}', '\u{013D}', '\u{013E}', '\u{0141}', '\u{0142}', '\u{0143}', '\u{0144}',
    '\u{0147}', '\u{0148}', '\u{0150}', '\u{0151}', '\u{0152}', '\u{0153}', '\u{0154}', '\u{0155}',
    '\u{0158}', '\u{0159}', '\u{015A}', '\u{015B}', '\u{015E}', '\u{015F}', '\u{0160}', '\u{0161}',
    '\u{0162}', '\u{0163}', '\u{0164}', '\u{0165}', '\u{016E}', '\u{016F}', '\u{0170}', '\u{0171}',
    '\u{0178}', '\u{0179}', '\u{017A}', '\u{017B}', '\u{017C}', '\u{017D}', '\u{017E}', '\u{0192}',
    '\u{02C6}', '\u{02C7}', '\u{02D8}', '\u{02D9}', '\u{02DA}', '\u{02DB}', '\u{02DC}', '\u{02DD}',
    '\u{03A9}', '\u{03C0}', '\u{2013}', '\u{2014}', '\u{2018}', '\u{2019}', '\u{201A}', '\u{201C}',
    '\u{201D}', '\u{201E}', '\u{2020}', '\u{2021}', '\u{2022}', '\u{2026}', '\u{2030}', '\u{2039}',
    '\u{203A}', '\u{2044}', '\u{20AC}', '\u{2122}', '\u{2202}', '\u{2206}', '\u{220F}', '\u{2211}',
    '\u{221A}', '\u{221E}', '\u{222B}', '\u{2248}', '\u{2260}', '\u{2264}', '\u{2265}', '\u{25CA}',
    '\u{F8FF}', '\u{FB01}', '\u{FB02}',
];
