//! Flow layout: places document elements line by line onto fixed-size pages.
//!
//! # Rules
//! - Text is wrapped greedily against the AFM width tables; a word wider than the
//!   frame is broken between characters.
//! - Lines flow individually, so a paragraph may continue on the next page.
//! - `space_before` is dropped at the top of a page; `space_after` is cut short at
//!   the bottom of one.
//! - A spacer that does not fit ends the page and is not carried over.
//! - `PageBreak` always starts a new page. A trailing empty page is discarded.
//!
//! Coordinates are PDF user space: origin bottom-left, y grows upwards.

use serde::Serialize;
use tracing::debug;

use crate::layout::assembler::{DocumentElement, HeadingLevel};
use crate::layout::font_metrics::{get_metrics, FontFace, FontMetricTable};
use crate::layout::styles::{Alignment, Border, Color, StylePreset, StyleSheet};
use crate::render::text::neutralize;
use crate::render::DocumentBuildError;

/// Glyph prepended to bullet items.
pub const BULLET_PREFIX: &str = "• ";

/// Helvetica descender depth in em; the baseline sits this far above the
/// bottom of each line box.
const DESCENT_EM: f32 = 0.207;

// ────────────────────────────────────────────────────────────────────────────
// Geometry
// ────────────────────────────────────────────────────────────────────────────

/// Page size and uniform margin, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    /// US letter (8.5in × 11in) with 50pt margins on all sides.
    pub const fn letter() -> Self {
        PageGeometry {
            width: 612.0,
            height: 792.0,
            margin: 50.0,
        }
    }

    pub fn frame_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    pub fn frame_height(&self) -> f32 {
        self.height - 2.0 * self.margin
    }

    fn frame_left(&self) -> f32 {
        self.margin
    }

    fn frame_top(&self) -> f32 {
        self.height - self.margin
    }

    fn frame_bottom(&self) -> f32 {
        self.margin
    }

    fn validate(&self) -> Result<(), DocumentBuildError> {
        let dims = [self.width, self.height, self.margin];
        if dims.iter().any(|d| !d.is_finite()) || self.margin < 0.0 {
            return Err(DocumentBuildError::InvalidGeometry {
                reason: format!(
                    "page {}x{} with margin {} is not a valid size",
                    self.width, self.height, self.margin
                ),
            });
        }
        if self.frame_width() <= 0.0 || self.frame_height() <= 0.0 {
            return Err(DocumentBuildError::InvalidGeometry {
                reason: format!(
                    "text frame is {}x{}pt after margins",
                    self.frame_width(),
                    self.frame_height()
                ),
            });
        }
        Ok(())
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::letter()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// One line of text at a fixed position. `text` is already neutralized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font: FontFace,
    pub size: f32,
    pub color: Color,
    /// Extra space added to every ASCII space (PDF `Tw`), used for justification.
    pub word_spacing: f32,
}

/// Stroked rectangle; `(x, y)` is the bottom-left corner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BorderBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub line_width: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PlacedItem {
    Text(TextRun),
    Border(BorderBox),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LaidOutPage {
    pub items: Vec<PlacedItem>,
}

impl LaidOutPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry point
// ────────────────────────────────────────────────────────────────────────────

/// Lays out the element list onto pages. Always returns at least one page.
pub fn layout(
    elements: &[DocumentElement],
    styles: &StyleSheet,
    geometry: &PageGeometry,
) -> Result<Vec<LaidOutPage>, DocumentBuildError> {
    geometry.validate()?;

    let mut flow = Flow::new(*geometry);
    for element in elements {
        match element {
            DocumentElement::Heading { text, level } => {
                let style = match level {
                    HeadingLevel::Main => &styles.main_heading,
                    HeadingLevel::Section => &styles.sub_heading,
                };
                flow.place_paragraph(&neutralize(text), style)?;
            }
            DocumentElement::BulletItem { text } => {
                let text = format!("{BULLET_PREFIX}{}", neutralize(text));
                flow.place_paragraph(&text, &styles.normal_body)?;
            }
            DocumentElement::Paragraph { text } => {
                flow.place_paragraph(&neutralize(text), &styles.normal_body)?;
            }
            DocumentElement::Spacer { height } => flow.place_spacer(*height),
            DocumentElement::PageBreak => flow.break_page(),
        }
    }

    let pages = flow.finish();
    debug!(
        elements = elements.len(),
        pages = pages.len(),
        "Flow layout complete"
    );
    Ok(pages)
}

// ────────────────────────────────────────────────────────────────────────────
// Line breaking
// ────────────────────────────────────────────────────────────────────────────

/// A wrapped line before positioning.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Line {
    pub text: String,
    /// Natural width in points.
    pub width: f32,
    /// Number of inter-word spaces.
    pub gaps: usize,
}

/// Greedy word wrap at `max_width` points. Empty text yields one empty line.
pub(crate) fn wrap_text(
    text: &str,
    metrics: &FontMetricTable,
    size: f32,
    max_width: f32,
) -> Result<Vec<Line>, DocumentBuildError> {
    let space_w = metrics.space_width * size;
    let mut lines = Vec::new();
    let mut words: Vec<String> = Vec::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        for piece in split_oversized(word, metrics, size, max_width)? {
            let piece_w = metrics.width_pt(&piece, size);
            if !words.is_empty() && current_width + space_w + piece_w > max_width {
                lines.push(finish_line(&mut words, current_width));
                current_width = 0.0;
            }
            if !words.is_empty() {
                current_width += space_w;
            }
            current_width += piece_w;
            words.push(piece);
        }
    }

    if !words.is_empty() || lines.is_empty() {
        lines.push(finish_line(&mut words, current_width));
    }
    Ok(lines)
}

fn finish_line(words: &mut Vec<String>, width: f32) -> Line {
    let gaps = words.len().saturating_sub(1);
    let text = words.join(" ");
    words.clear();
    Line { text, width, gaps }
}

/// Breaks a word that cannot fit on a line by itself into frame-width pieces.
fn split_oversized(
    word: &str,
    metrics: &FontMetricTable,
    size: f32,
    max_width: f32,
) -> Result<Vec<String>, DocumentBuildError> {
    if metrics.width_pt(word, size) <= max_width {
        return Ok(vec![word.to_string()]);
    }

    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_w = 0.0_f32;
    for c in word.chars() {
        let char_w = metrics.char_width(c) * size;
        if char_w > max_width {
            return Err(DocumentBuildError::ContentTooWide {
                glyph: c,
                glyph_width: char_w,
                frame_width: max_width,
            });
        }
        if piece_w + char_w > max_width {
            pieces.push(std::mem::take(&mut piece));
            piece_w = 0.0;
        }
        piece.push(c);
        piece_w += char_w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    Ok(pieces)
}

// ────────────────────────────────────────────────────────────────────────────
// Flow state
// ────────────────────────────────────────────────────────────────────────────

struct Flow {
    geometry: PageGeometry,
    pages: Vec<LaidOutPage>,
    current: LaidOutPage,
    /// Top edge of the next line box.
    cursor: f32,
    at_top: bool,
}

impl Flow {
    fn new(geometry: PageGeometry) -> Self {
        Flow {
            geometry,
            pages: Vec::new(),
            current: LaidOutPage::default(),
            cursor: geometry.frame_top(),
            at_top: true,
        }
    }

    fn remaining(&self) -> f32 {
        self.cursor - self.geometry.frame_bottom()
    }

    fn break_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.pages.push(page);
        self.cursor = self.geometry.frame_top();
        self.at_top = true;
    }

    fn finish(mut self) -> Vec<LaidOutPage> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }

    fn place_spacer(&mut self, height: f32) {
        let height = height.max(0.0);
        if height > self.remaining() {
            self.break_page();
            return;
        }
        self.cursor -= height;
        self.at_top = false;
    }

    fn place_paragraph(&mut self, text: &str, style: &StylePreset) -> Result<(), DocumentBuildError> {
        let frame_height = self.geometry.frame_height();
        if style.leading > frame_height {
            return Err(DocumentBuildError::FlowableTooLarge {
                style: style.name,
                height: style.leading,
                available: frame_height,
            });
        }

        let metrics = get_metrics(style.font);
        let frame_width = self.geometry.frame_width();
        let lines = wrap_text(text, metrics, style.font_size, frame_width)?;

        if !self.at_top {
            if style.space_before >= self.remaining() {
                self.break_page();
            } else {
                self.cursor -= style.space_before;
            }
        }

        let last = lines.len() - 1;
        let mut fragment_top = self.cursor;
        for (i, line) in lines.into_iter().enumerate() {
            if style.leading > self.remaining() {
                self.close_fragment(style.border, fragment_top);
                self.break_page();
                fragment_top = self.cursor;
            }
            self.place_line(line, style, i == last);
            self.cursor -= style.leading;
            self.at_top = false;
        }
        self.close_fragment(style.border, fragment_top);

        self.cursor -= style.space_after.min(self.remaining());
        Ok(())
    }

    fn place_line(&mut self, line: Line, style: &StylePreset, is_last: bool) {
        let frame_width = self.geometry.frame_width();
        let left = self.geometry.frame_left();

        let (x, word_spacing) = match style.alignment {
            Alignment::Left => (left, 0.0),
            Alignment::Center => (left + ((frame_width - line.width) / 2.0).max(0.0), 0.0),
            Alignment::Justify if !is_last && line.gaps > 0 => {
                (left, ((frame_width - line.width) / line.gaps as f32).max(0.0))
            }
            Alignment::Justify => (left, 0.0),
        };

        let baseline = self.cursor - style.leading + DESCENT_EM * style.font_size;
        self.current.items.push(PlacedItem::Text(TextRun {
            x,
            y: baseline,
            text: line.text,
            font: style.font,
            size: style.font_size,
            color: style.color,
            word_spacing,
        }));
    }

    /// Draws the border around the lines placed since `fragment_top`, if any.
    fn close_fragment(&mut self, border: Option<Border>, fragment_top: f32) {
        let Some(border) = border else { return };
        if self.cursor >= fragment_top {
            return;
        }
        let left = self.geometry.frame_left();
        self.current.items.push(PlacedItem::Border(BorderBox {
            x: left - border.padding,
            y: self.cursor - border.padding,
            width: self.geometry.frame_width() + 2.0 * border.padding,
            height: fragment_top - self.cursor + 2.0 * border.padding,
            line_width: border.width,
            color: border.color,
        }));
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
