//! Named style presets and the template palettes that color them.
//!
//! Sizes, leading, spacing and alignment are fixed; the template only decides
//! the heading colors and whether section headings get a border.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::FontFace;

// ────────────────────────────────────────────────────────────────────────────
// Template style
// ────────────────────────────────────────────────────────────────────────────

/// User-selected template. Unrecognized names fall back to `Classic`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum TemplateStyle {
    #[default]
    Modern,
    Classic,
    Executive,
}

impl TemplateStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateStyle::Modern => "Modern",
            TemplateStyle::Classic => "Classic",
            TemplateStyle::Executive => "Executive",
        }
    }

    fn palette(&self) -> Palette {
        match self {
            TemplateStyle::Modern => Palette {
                primary: Color::from_hex(0x2E3192),
                secondary: Color::from_hex(0x1BFFFF),
            },
            TemplateStyle::Classic | TemplateStyle::Executive => Palette {
                primary: Color::BLACK,
                secondary: Color::GREY,
            },
        }
    }
}

impl FromStr for TemplateStyle {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "modern" => TemplateStyle::Modern,
            "executive" => TemplateStyle::Executive,
            _ => TemplateStyle::Classic,
        })
    }
}

impl From<String> for TemplateStyle {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(style) => style,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for TemplateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Visual primitives
// ────────────────────────────────────────────────────────────────────────────

/// RGB color with components in 0.0..=1.0, the form PDF color operators take.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
    pub const GREY: Color = Color { r: 0.5, g: 0.5, b: 0.5 };

    pub fn from_hex(rgb: u32) -> Self {
        let channel = |shift: u32| ((rgb >> shift) & 0xFF) as f32 / 255.0;
        Color {
            r: channel(16),
            g: channel(8),
            b: channel(0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Justify,
}

/// Box drawn around a paragraph, outset from the text by `padding`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub width: f32,
    pub color: Color,
    pub padding: f32,
}

struct Palette {
    primary: Color,
    secondary: Color,
}

// ────────────────────────────────────────────────────────────────────────────
// Presets
// ────────────────────────────────────────────────────────────────────────────

/// Immutable bundle of paragraph formatting attributes. All lengths in points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StylePreset {
    pub name: &'static str,
    pub font: FontFace,
    pub font_size: f32,
    pub leading: f32,
    pub color: Color,
    pub alignment: Alignment,
    pub space_before: f32,
    pub space_after: f32,
    pub border: Option<Border>,
}

/// The three presets a document is rendered with.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub main_heading: StylePreset,
    pub sub_heading: StylePreset,
    pub normal_body: StylePreset,
}

impl StyleSheet {
    pub fn for_template(template: TemplateStyle) -> Self {
        let palette = template.palette();
        let sub_heading_border = match template {
            TemplateStyle::Modern => Some(Border {
                width: 1.0,
                color: palette.secondary,
                padding: 2.0,
            }),
            TemplateStyle::Classic | TemplateStyle::Executive => None,
        };

        StyleSheet {
            main_heading: StylePreset {
                name: "MainHeading",
                font: FontFace::HelveticaBold,
                font_size: 22.0,
                leading: 26.0,
                color: palette.primary,
                alignment: Alignment::Center,
                space_before: 0.0,
                space_after: 14.0,
                border: None,
            },
            sub_heading: StylePreset {
                name: "SubHeading",
                font: FontFace::HelveticaBold,
                font_size: 14.0,
                leading: 16.0,
                color: palette.primary,
                alignment: Alignment::Left,
                space_before: 14.0,
                space_after: 8.0,
                border: sub_heading_border,
            },
            normal_body: StylePreset {
                name: "NormalBody",
                font: FontFace::Helvetica,
                font_size: 10.0,
                leading: 13.0,
                color: Color::BLACK,
                alignment: Alignment::Justify,
                space_before: 0.0,
                space_after: 5.0,
                border: None,
            },
        }
    }
}
