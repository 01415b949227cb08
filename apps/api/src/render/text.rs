//! Neutralizes arbitrary model output before it reaches layout.
//!
//! The base-14 fonts are written with WinAnsiEncoding, so every character that
//! reaches a content stream must have a windows-1252 code point. Anything else
//! is replaced here, once, so that measurement and encoding agree.
//! The PDF writer emits hex strings, so string delimiters need no escaping.

use encoding_rs::WINDOWS_1252;

/// Substitute for characters the fonts cannot show.
pub const REPLACEMENT: char = '?';

/// Returns text that contains only WinAnsi-encodable, non-control characters.
///
/// Tabs become spaces, other control characters are removed, and unencodable
/// characters become [`REPLACEMENT`].
pub fn neutralize(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\t' => Some(' '),
            c if c.is_control() => None,
            c if is_encodable(c) => Some(c),
            _ => Some(REPLACEMENT),
        })
        .collect()
}

/// Encodes neutralized text to WinAnsi bytes for a PDF string operand.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for c in text.chars() {
        let (bytes, _, unmappable) = WINDOWS_1252.encode(c.encode_utf8(&mut buf));
        if unmappable || bytes.len() != 1 {
            out.push(REPLACEMENT as u8);
        } else {
            out.extend_from_slice(&bytes);
        }
    }
    out
}

fn is_encodable(c: char) -> bool {
    if c.is_ascii() {
        return true;
    }
    let mut buf = [0u8; 4];
    let (bytes, _, unmappable) = WINDOWS_1252.encode(c.encode_utf8(&mut buf));
    !unmappable && bytes.len() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ascii_is_untouched() {
        let text = "Cut costs by 30% (FY23) & shipped <v2> \\o/";
        assert_eq!(neutralize(text), text);
    }

    #[test]
    fn test_control_characters_are_removed_and_tabs_become_spaces() {
        assert_eq!(neutralize("a\u{0}b\u{7}c\td"), "abc d");
    }

    #[test]
    fn test_unencodable_characters_are_replaced() {
        assert_eq!(neutralize("Go 🚀 now"), "Go ? now");
        assert_eq!(neutralize("日本"), "??");
    }

    #[test]
    fn test_win_ansi_extras_survive() {
        let text = "• café – “quoted” €5";
        assert_eq!(neutralize(text), text);
    }

    #[test]
    fn test_encode_maps_to_single_bytes() {
        assert_eq!(encode_win_ansi("•"), vec![0x95]);
        assert_eq!(encode_win_ansi("é"), vec![0xE9]);
        assert_eq!(encode_win_ansi("€"), vec![0x80]);
        assert_eq!(encode_win_ansi("(a)"), b"(a)".to_vec());
    }

    #[test]
    fn test_encode_of_neutralized_text_is_one_byte_per_char() {
        let neutral = neutralize("Résumé 🚀 — “done”\u{1}");
        assert_eq!(encode_win_ansi(&neutral).len(), neutral.chars().count());
    }
}
