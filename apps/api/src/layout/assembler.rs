//! Document Assembler: turns classified résumé blocks plus a cover letter into
//! the ordered element list the renderer consumes.
//!
//! Layout of every assembled document:
//! name heading, spacer, résumé blocks, page break, "COVER LETTER" heading,
//! spacer, cover-letter lines. Assembly never fails.

use serde::{Deserialize, Serialize};

use crate::layout::classifier::{classify_resume, split_lines, Block, BlockKind};
use crate::models::resume::GeneratedText;

/// Shown in place of a blank candidate name.
pub const NAME_PLACEHOLDER: &str = "Candidate";
pub const COVER_LETTER_HEADING: &str = "COVER LETTER";

/// Gap under the name heading (0.1in).
pub const NAME_SPACER_PT: f32 = 7.2;
/// Gap under the cover-letter heading (0.2in).
pub const COVER_HEADING_SPACER_PT: f32 = 14.4;
/// Height of a blank cover-letter line (0.12in).
pub const BLANK_LINE_SPACER_PT: f32 = 8.64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingLevel {
    /// Document titles: the candidate name and the cover-letter title.
    Main,
    /// Résumé section headings found by the classifier.
    Section,
}

/// A renderer-ready instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentElement {
    Heading { text: String, level: HeadingLevel },
    BulletItem { text: String },
    Paragraph { text: String },
    Spacer { height: f32 },
    PageBreak,
}

impl DocumentElement {
    fn main_heading(text: impl Into<String>) -> Self {
        DocumentElement::Heading {
            text: text.into(),
            level: HeadingLevel::Main,
        }
    }

    fn spacer(height: f32) -> Self {
        DocumentElement::Spacer { height }
    }
}

impl From<Block> for DocumentElement {
    fn from(block: Block) -> Self {
        match block.kind {
            BlockKind::Heading => DocumentElement::Heading {
                text: block.text,
                level: HeadingLevel::Section,
            },
            BlockKind::Bullet => DocumentElement::BulletItem { text: block.text },
            BlockKind::Body => DocumentElement::Paragraph { text: block.text },
        }
    }
}

/// Builds the full element sequence for one document.
pub fn assemble(
    candidate_name: &str,
    resume_blocks: Vec<Block>,
    cover_letter: &str,
) -> Vec<DocumentElement> {
    let mut elements = Vec::with_capacity(resume_blocks.len() + 8);

    // Whitespace-only names count as blank, not just the empty string, so the
    // heading is never an invisible line.
    let name = match candidate_name.trim() {
        "" => NAME_PLACEHOLDER,
        name => name,
    };
    elements.push(DocumentElement::main_heading(name.to_uppercase()));
    elements.push(DocumentElement::spacer(NAME_SPACER_PT));

    elements.extend(resume_blocks.into_iter().map(DocumentElement::from));

    elements.push(DocumentElement::PageBreak);
    elements.push(DocumentElement::main_heading(COVER_LETTER_HEADING));
    elements.push(DocumentElement::spacer(COVER_HEADING_SPACER_PT));

    // Blank lines survive here as vertical space; the résumé path drops them.
    for line in split_lines(cover_letter) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            elements.push(DocumentElement::spacer(BLANK_LINE_SPACER_PT));
        } else {
            elements.push(DocumentElement::Paragraph {
                text: trimmed.to_string(),
            });
        }
    }

    elements
}

/// Classifies the résumé body and assembles it with the cover letter.
pub fn build_elements(candidate_name: &str, text: &GeneratedText) -> Vec<DocumentElement> {
    let blocks = classify_resume(&text.resume_body);
    assemble(candidate_name, blocks, &text.cover_letter_body)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
