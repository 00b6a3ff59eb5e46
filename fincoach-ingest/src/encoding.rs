//! Bounded multi-encoding decode for user-supplied files.
//!
//! Strict UTF-8 first, then Windows-1252. The second step is total over every
//! byte and also covers Latin-1/ISO-8859-1 exports from older banking
//! portals, so the ladder is a fixed two-rung list, not a retry strategy.

/// Windows-1252 codepoints for the 0x80-0x9F block; every other byte maps
/// straight through as Latin-1.
const CP1252_HIGH: [char; 32] = [
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008D}', '\u{017D}', '\u{008F}',
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{009D}', '\u{017E}', '\u{0178}',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Windows1252,
}

/// The encodings tried, in order.
pub const ENCODING_LADDER: &[Encoding] = &[Encoding::Utf8, Encoding::Windows1252];

impl Encoding {
    pub fn label(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Windows1252 => "windows-1252",
        }
    }

    /// Decode the whole buffer, or `None` when the bytes are invalid for
    /// this encoding.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Encoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            Encoding::Windows1252 => Some(
                bytes
                    .iter()
                    .map(|&b| match b {
                        0x80..=0x9F => CP1252_HIGH[(b - 0x80) as usize],
                        _ => b as char,
                    })
                    .collect(),
            ),
        }
    }
}

/// Run the ladder, reporting which encoding succeeded.
pub fn decode_text(bytes: &[u8]) -> Option<(String, &'static str)> {
    ENCODING_LADDER
        .iter()
        .find_map(|encoding| encoding.decode(bytes).map(|text| (text, encoding.label())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_decodes_first() {
        let (text, label) = decode_text("Date,Amount\n".as_bytes()).unwrap();
        assert_eq!(text, "Date,Amount\n");
        assert_eq!(label, "utf-8");
    }

    #[test]
    fn test_windows_1252_fallback() {
        // 0x93/0x94 are curly quotes in Windows-1252 and invalid UTF-8.
        let bytes = b"caf\xe9,\x93quoted\x94";
        let (text, label) = decode_text(bytes).unwrap();
        assert_eq!(label, "windows-1252");
        assert_eq!(text, "café,\u{201C}quoted\u{201D}");
    }

    #[test]
    fn test_latin_1_control_range_is_total() {
        // Bytes undefined in strict cp1252 still decode (Latin-1 behavior),
        // keeping the ladder total over arbitrary input.
        let bytes = b"\x81\x8d\x8f\x90\x9d";
        assert!(decode_text(bytes).is_some());
    }
}
