//! Drawing-surface abstraction consumed by the composers
//!
//! Every primitive takes its style explicitly; a surface keeps no current
//! font or colour between calls.

use crate::layout::Rect;
use crate::types::Result;
use image::DynamicImage;

/// RGB colour, components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: f32) -> Self {
        Self::rgb(level, level, level)
    }
}

impl From<(f32, f32, f32)> for Color {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Self::rgb(r, g, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

impl StrokeStyle {
    pub fn new(color: impl Into<Color>, width: f32) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: FontFace,
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub fn new(font: FontFace, size: f32) -> Self {
        Self {
            font,
            size,
            color: Color::BLACK,
        }
    }
}

/// Measures rendered text width in points
pub trait TextMeasure {
    fn text_width(&self, text: &str, font: FontFace, size: f32) -> f32;
}

/// An append-only sequence of pages that shapes, text and images are drawn on.
pub trait DrawingSurface: TextMeasure {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, stroke: StrokeStyle);

    /// Rectangle with circular corners of `radius`
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, stroke: StrokeStyle);

    fn line(&mut self, from: (f32, f32), to: (f32, f32), stroke: StrokeStyle);

    /// Draw `text` with its baseline starting at `(x, y)`
    fn text(&mut self, x: f32, y: f32, text: &str, style: &TextStyle);

    /// Draw `image` scaled to exactly fill `rect`
    fn image(&mut self, image: &DynamicImage, rect: Rect) -> Result<()>;

    /// Finalize the current page and start a new one
    fn show_page(&mut self);

    /// Number of finalized pages
    fn page_count(&self) -> usize;
}
