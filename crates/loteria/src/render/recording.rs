//! In-memory surface that records draw commands per page

use super::BuiltinMetrics;
use crate::layout::Rect;
use crate::surface::{Color, DrawingSurface, FontFace, StrokeStyle, TextMeasure, TextStyle};
use crate::types::Result;
use image::DynamicImage;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        stroke: StrokeStyle,
    },
    StrokeRoundedRect {
        rect: Rect,
        radius: f32,
        stroke: StrokeStyle,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        stroke: StrokeStyle,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        style: TextStyle,
    },
    Image {
        /// Pixel size of the (already cropped) image
        pixels: (u32, u32),
        rect: Rect,
    },
}

/// Records every primitive instead of rendering it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pages: Vec<Vec<DrawCommand>>,
    current: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalized pages
    pub fn pages(&self) -> &[Vec<DrawCommand>] {
        &self.pages
    }

    /// Commands drawn since the last `show_page`
    pub fn current(&self) -> &[DrawCommand] {
        &self.current
    }

    pub fn images(page: &[DrawCommand]) -> impl Iterator<Item = (&(u32, u32), &Rect)> {
        page.iter().filter_map(|cmd| match cmd {
            DrawCommand::Image { pixels, rect } => Some((pixels, rect)),
            _ => None,
        })
    }

    pub fn texts(page: &[DrawCommand]) -> impl Iterator<Item = &str> {
        page.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl TextMeasure for RecordingSurface {
    fn text_width(&self, text: &str, font: FontFace, size: f32) -> f32 {
        BuiltinMetrics.text_width(text, font, size)
    }
}

impl DrawingSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.current.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: StrokeStyle) {
        self.current.push(DrawCommand::StrokeRect { rect, stroke });
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, stroke: StrokeStyle) {
        self.current.push(DrawCommand::StrokeRoundedRect {
            rect,
            radius,
            stroke,
        });
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), stroke: StrokeStyle) {
        self.current.push(DrawCommand::Line { from, to, stroke });
    }

    fn text(&mut self, x: f32, y: f32, text: &str, style: &TextStyle) {
        self.current.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            style: *style,
        });
    }

    fn image(&mut self, image: &DynamicImage, rect: Rect) -> Result<()> {
        self.current.push(DrawCommand::Image {
            pixels: (image.width(), image.height()),
            rect,
        });
        Ok(())
    }

    fn show_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }
}
