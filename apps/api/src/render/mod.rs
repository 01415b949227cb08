// Document rendering: flow layout of assembled elements onto pages, then PDF
// serialization. Pure and CPU-bound; callers on the async runtime must wrap it
// in tokio::task::spawn_blocking.

pub mod flow;
pub mod pdf;
pub mod text;

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

use crate::layout::assembler::DocumentElement;
use crate::layout::styles::{StyleSheet, TemplateStyle};
use flow::PageGeometry;

/// Failures while turning elements into a PDF. No partial output survives one.
#[derive(Debug, Error)]
pub enum DocumentBuildError {
    #[error("invalid page geometry: {reason}")]
    InvalidGeometry { reason: String },

    #[error("{style} line needs {height}pt but an empty page frame has {available}pt")]
    FlowableTooLarge {
        style: &'static str,
        height: f32,
        available: f32,
    },

    #[error("glyph {glyph:?} is {glyph_width}pt wide, frame is {frame_width}pt")]
    ContentTooWide {
        glyph: char,
        glyph_width: f32,
        frame_width: f32,
    },

    #[error("PDF serialization failed: {0}")]
    Serialize(String),
}

/// A finalized PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    bytes: Bytes,
    page_count: usize,
}

impl OutputDocument {
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

/// Renders elements onto US-letter pages in the given template.
pub fn render(
    elements: &[DocumentElement],
    template: TemplateStyle,
) -> Result<OutputDocument, DocumentBuildError> {
    render_with_geometry(elements, template, &PageGeometry::letter())
}

pub fn render_with_geometry(
    elements: &[DocumentElement],
    template: TemplateStyle,
    geometry: &PageGeometry,
) -> Result<OutputDocument, DocumentBuildError> {
    let styles = StyleSheet::for_template(template);
    let pages = flow::layout(elements, &styles, geometry)?;
    let bytes = pdf::write_pdf(&pages, geometry)?;

    debug!(
        template = %template,
        pages = pages.len(),
        size_bytes = bytes.len(),
        "Rendered document"
    );

    Ok(OutputDocument {
        bytes: Bytes::from(bytes),
        page_count: pages.len(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::assembler::build_elements;
    use crate::models::resume::GeneratedText;

    fn generated(resume: &str, cover: &str) -> GeneratedText {
        GeneratedText {
            resume_body: resume.to_string(),
            cover_letter_body: cover.to_string(),
        }
    }

    fn pdf_page_count(doc: &OutputDocument) -> usize {
        lopdf::Document::load_mem(&doc.bytes).unwrap().get_pages().len()
    }

    const SAMPLE_RESUME: &str = "PROFESSIONAL SUMMARY\n\
        Backend engineer with eight years building payment systems.\n\
        \n\
        EXPERIENCE\n\
        - Led a team of 5 engineers\n\
        - Cut p99 latency by 40%\n\
        EDUCATION\n\
        B.Sc. Computer Science";

    #[test]
    fn test_resume_and_cover_letter_take_two_pages() {
        let elements = build_elements(
            "Jane Doe",
            &generated(SAMPLE_RESUME, "Dear Hiring Manager,\n\nSincerely,\nJane"),
        );
        let doc = render(&elements, TemplateStyle::Modern).unwrap();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(pdf_page_count(&doc), 2);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let elements = build_elements("Jane Doe", &generated(SAMPLE_RESUME, "Dear team,"));
        let a = render(&elements, TemplateStyle::Modern).unwrap();
        let b = render(&elements, TemplateStyle::Modern).unwrap();
        assert_eq!(a.bytes, b.bytes);
    }

    #[test]
    fn test_empty_input_still_renders() {
        let elements = build_elements("", &generated("", ""));
        let doc = render(&elements, TemplateStyle::Classic).unwrap();
        assert_eq!(pdf_page_count(&doc), 2);
    }

    #[test]
    fn test_special_characters_render() {
        let resume = "SKILLS\n- C++ (templates) \\ <generics> & more\n- Shipped 🚀 on time\u{0}\u{7}";
        let elements = build_elements("O'Brien (Jr.)", &generated(resume, "Thanks :) \\o/"));
        let doc = render(&elements, TemplateStyle::Executive).unwrap();
        assert_eq!(pdf_page_count(&doc), 2);
    }

    #[test]
    fn test_long_resume_spans_several_pages() {
        let resume: String = (0..150)
            .map(|i| format!("- Delivered project number {i} ahead of schedule and under budget\n"))
            .collect();
        let elements = build_elements("Jane Doe", &generated(&resume, "Regards"));
        let doc = render(&elements, TemplateStyle::Modern).unwrap();
        assert!(doc.page_count() >= 4, "got {} pages", doc.page_count());
        assert_eq!(pdf_page_count(&doc), doc.page_count());
    }

    #[test]
    fn test_zero_width_frame_is_rejected() {
        let elements = build_elements("Jane", &generated("EXPERIENCE", ""));
        let geometry = PageGeometry {
            width: 100.0,
            height: 792.0,
            margin: 50.0,
        };
        let err = render_with_geometry(&elements, TemplateStyle::Modern, &geometry).unwrap_err();
        assert!(matches!(err, DocumentBuildError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_every_template_renders() {
        let elements = build_elements("Jane", &generated(SAMPLE_RESUME, "Hello"));
        for template in [
            TemplateStyle::Modern,
            TemplateStyle::Classic,
            TemplateStyle::Executive,
        ] {
            let doc = render(&elements, template).unwrap();
            assert!(doc.bytes.starts_with(b"%PDF"));
        }
    }
}
