//! Text Classifier: assigns each line of generated résumé text a block kind.
//!
//! # Rules (first match wins)
//! 1. Heading: the line is upper-case, OR its upper-cased form contains a section
//!    keyword and it is shorter than [`HEADING_MAX_CHARS`] characters.
//! 2. Bullet: the line starts with one of [`BULLET_MARKERS`].
//! 3. Body: everything else.
//!
//! The Heading test runs first, so an all-caps bulleted line ("- LED TEAM") is a
//! Heading and loses its marker. Downstream output depends on this ordering.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Rule tables
// ────────────────────────────────────────────────────────────────────────────

/// Section keywords that promote a short line to a heading regardless of case.
pub const SECTION_KEYWORDS: &[&str] = &["SUMMARY", "EXPERIENCE", "EDUCATION", "SKILLS", "PROJECTS"];

/// Keyword-bearing lines must be strictly shorter than this (in characters).
pub const HEADING_MAX_CHARS: usize = 30;

/// Leading characters that mark a bullet line.
pub const BULLET_MARKERS: &[char] = &['-', '•', '*'];

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Heading,
    Bullet,
    Body,
}

/// One classified, display-normalized line of résumé text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Classification
// ────────────────────────────────────────────────────────────────────────────

/// Classifies a single trimmed, non-empty line.
pub fn classify(line: &str) -> BlockKind {
    if is_heading(line) {
        BlockKind::Heading
    } else if line.starts_with(BULLET_MARKERS) {
        BlockKind::Bullet
    } else {
        BlockKind::Body
    }
}

/// Trims and classifies a raw line, normalizing its text for display.
///
/// Returns `None` for blank lines; every other line yields a block.
pub fn classify_line(raw: &str) -> Option<Block> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }

    let kind = classify(line);
    let text = match kind {
        BlockKind::Heading => line.to_uppercase(),
        BlockKind::Bullet => line.trim_start_matches(BULLET_MARKERS).trim().to_string(),
        BlockKind::Body => line.to_string(),
    };
    Some(Block { kind, text })
}

/// Classifies every non-blank line of a résumé body, in order.
pub fn classify_resume(body: &str) -> Vec<Block> {
    split_lines(body).filter_map(classify_line).collect()
}

/// Characters that end a line: `\n`, `\r`, vertical tab, form feed, the
/// file/group/record separators, NEL, and the Unicode line and paragraph
/// separators.
pub const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Splits text on every [`LINE_BREAKS`] character, treating `\r\n` as one break.
///
/// A trailing line terminator does not produce a final empty line, and empty
/// input yields no lines.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text).filter(|t| !t.is_empty());
    std::iter::from_fn(move || {
        let current = rest?;
        match current.char_indices().find(|(_, c)| LINE_BREAKS.contains(c)) {
            Some((idx, c)) => {
                let line = &current[..idx];
                let skip = if current[idx..].starts_with("\r\n") { 2 } else { c.len_utf8() };
                let remaining = &current[idx + skip..];
                rest = Some(remaining).filter(|r| !r.is_empty());
                Some(line)
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

fn is_heading(line: &str) -> bool {
    if is_upper(line) {
        return true;
    }
    let upper = line.to_uppercase();
    SECTION_KEYWORDS.iter().any(|kw| upper.contains(kw)) && line.chars().count() < HEADING_MAX_CHARS
}

/// True when the line has at least one cased letter and no lower-case letters.
fn is_upper(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_all_caps_line_is_heading() {
        let block = classify_line("PROFESSIONAL SUMMARY").unwrap();
        assert_eq!(block.kind, BlockKind::Heading);
        assert_eq!(block.text, "PROFESSIONAL SUMMARY");
    }

    #[test]
    fn test_dash_bullet_is_stripped() {
        let block = classify_line("- Led a team of 5 engineers").unwrap();
        assert_eq!(block.kind, BlockKind::Bullet);
        assert_eq!(block.text, "Led a team of 5 engineers");
    }

    #[test]
    fn test_mixed_case_keyword_line_is_heading() {
        let block = classify_line("Work Experience").unwrap();
        assert_eq!(block.kind, BlockKind::Heading);
        assert_eq!(block.text, "WORK EXPERIENCE");
    }

    #[test]
    fn test_long_keyword_line_is_body() {
        let line = "Gained experience shipping payment systems at scale";
        assert!(line.chars().count() >= HEADING_MAX_CHARS);
        assert_eq!(classify(line), BlockKind::Body);
    }

    #[test]
    fn test_keyword_match_ignores_case() {
        assert_eq!(classify("my skills"), BlockKind::Heading);
    }

    #[test]
    fn test_all_caps_bullet_is_heading_not_bullet() {
        let block = classify_line("- LED PLATFORM TEAM").unwrap();
        assert_eq!(block.kind, BlockKind::Heading);
        assert_eq!(block.text, "- LED PLATFORM TEAM");
    }

    #[test]
    fn test_short_keyword_bullet_is_heading() {
        // Keyword + length rule fires before the bullet rule.
        assert_eq!(classify("* Skills: Rust"), BlockKind::Heading);
    }

    #[test]
    fn test_other_bullet_markers() {
        let star = classify_line("* Shipped v2 of the billing API").unwrap();
        assert_eq!(star.kind, BlockKind::Bullet);
        assert_eq!(star.text, "Shipped v2 of the billing API");

        let dot = classify_line("•   Cut p99 latency by 40%").unwrap();
        assert_eq!(dot.kind, BlockKind::Bullet);
        assert_eq!(dot.text, "Cut p99 latency by 40%");
    }

    #[test]
    fn test_repeated_markers_are_all_stripped() {
        let block = classify_line("--* Automated release notes").unwrap();
        assert_eq!(block.text, "Automated release notes");
    }

    #[test]
    fn test_bare_marker_is_kept_as_empty_bullet() {
        let block = classify_line("-").unwrap();
        assert_eq!(block.kind, BlockKind::Bullet);
        assert_eq!(block.text, "");
    }

    #[test]
    fn test_digits_only_line_is_body() {
        // No cased letters, so not upper-case.
        assert_eq!(classify("2019 - 2023"), BlockKind::Body);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert!(classify_line("").is_none());
        assert!(classify_line("   \t ").is_none());
    }

    #[test]
    fn test_classify_resume_drops_blank_lines_and_keeps_order() {
        let body = "JANE DOE\n\nSenior engineer with a decade of backend work.\n   \n- Built things\r\nEDUCATION\n";
        let blocks = classify_resume(body);
        let kinds: Vec<BlockKind> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Heading,
                BlockKind::Body,
                BlockKind::Bullet,
                BlockKind::Heading
            ]
        );
    }

    #[test]
    fn test_classify_resume_empty_body() {
        assert!(classify_resume("").is_empty());
        assert!(classify_resume("\n\n  \n").is_empty());
    }

    #[test]
    fn test_split_lines_handles_all_terminators() {
        let lines: Vec<&str> = split_lines("a\nb\r\nc\rd\u{0c}e\u{2028}f").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_split_lines_handles_unicode_and_control_separators() {
        let text = "a\u{0b}b\u{1c}c\u{1d}d\u{1e}e\u{85}f\u{2029}g";
        let lines: Vec<&str> = split_lines(text).collect();
        assert_eq!(lines, vec!["a", "b", "c", "d", "e", "f", "g"]);
    }

    #[test]
    fn test_line_separator_splits_heading_from_bullet() {
        let blocks = classify_resume("EXPERIENCE\u{2028}- Led a team of 5 engineers");
        assert_eq!(
            blocks,
            vec![
                Block {
                    kind: BlockKind::Heading,
                    text: "EXPERIENCE".to_string(),
                },
                Block {
                    kind: BlockKind::Bullet,
                    text: "Led a team of 5 engineers".to_string(),
                },
            ]
        );
        assert_eq!(classify_resume("SUMMARY\u{0c}Built payment systems").len(), 2);
    }

    #[test]
    fn test_paragraph_separators_keep_blank_lines() {
        let lines: Vec<&str> = split_lines("Dear Hiring Manager,\u{2029}\u{2029}Sincerely,").collect();
        assert_eq!(lines, vec!["Dear Hiring Manager,", "", "Sincerely,"]);
    }

    #[test]
    fn test_split_lines_keeps_inner_blank_lines() {
        let lines: Vec<&str> = split_lines("Dear Hiring Manager,\n\nSincerely,").collect();
        assert_eq!(lines, vec!["Dear Hiring Manager,", "", "Sincerely,"]);
    }

    #[test]
    fn test_split_lines_trailing_terminator_and_empty_input() {
        assert_eq!(split_lines("a\n").collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(split_lines("\n").collect::<Vec<_>>(), vec![""]);
        assert_eq!(split_lines("").count(), 0);
    }

    proptest! {
        #[test]
        fn prop_short_upper_lines_are_headings(line in "[A-Z][A-Z0-9 &/]{0,27}") {
            let line = line.trim();
            prop_assume!(!line.is_empty());
            prop_assert_eq!(classify(line), BlockKind::Heading);
        }

        #[test]
        fn prop_lower_case_bullets_are_stripped(marker in "[-•*]", text in "[a-z][a-z ]{0,40}[a-z]") {
            let line = format!("{marker} {text}");
            let upper = line.to_uppercase();
            prop_assume!(!SECTION_KEYWORDS.iter().any(|kw| upper.contains(kw)));
            let block = classify_line(&line).unwrap();
            prop_assert_eq!(block.kind, BlockKind::Bullet);
            prop_assert_eq!(block.text, text);
        }

        #[test]
        fn prop_plain_lower_case_lines_are_body(text in "[a-z][a-z ,.]{0,60}") {
            let upper = text.to_uppercase();
            prop_assume!(!SECTION_KEYWORDS.iter().any(|kw| upper.contains(kw)));
            prop_assert_eq!(classify(text.trim()), BlockKind::Body);
        }

        #[test]
        fn prop_non_blank_lines_are_never_dropped(body in "[ -~\n]{0,200}") {
            let expected = split_lines(&body).filter(|l| !l.trim().is_empty()).count();
            prop_assert_eq!(classify_resume(&body).len(), expected);
        }
    }
}
