// Document structure: line classification, element assembly, style presets
// and the font metrics shared with the renderer.
// Everything here is pure and synchronous.

pub mod assembler;
pub mod classifier;
pub mod font_metrics;
pub mod styles;
