//! PDF drawing surface backed by `printpdf`
//!
//! Each primitive is emitted inside its own save/restore pair so that colours
//! and line widths never leak from one draw call into the next.

use super::BuiltinMetrics;
use crate::constants::{PAGE_HEIGHT_PT, PAGE_WIDTH_PT, pt_to_mm};
use crate::layout::Rect;
use crate::surface::{Color, DrawingSurface, FontFace, StrokeStyle, TextMeasure, TextStyle};
use crate::types::{LoteriaError, Result};
use ::image::DynamicImage;
use printpdf::*;

/// Bezier handle length for a quarter circle
const KAPPA: f32 = 0.552_284_8;

pub struct PdfSurface {
    doc: PdfDocument,
    ops: Vec<Op>,
    page_width_pt: f32,
    page_height_pt: f32,
    font: Option<(ParsedFont, FontId)>,
}

impl PdfSurface {
    /// A Letter-portrait document using the built-in Helvetica faces
    pub fn new(title: &str) -> Self {
        Self {
            doc: PdfDocument::new(title),
            ops: Vec::new(),
            page_width_pt: PAGE_WIDTH_PT,
            page_height_pt: PAGE_HEIGHT_PT,
            font: None,
        }
    }

    /// Like [`PdfSurface::new`] but every caption and title uses the given
    /// TrueType font, embedded in the output.
    pub fn with_font(title: &str, font_bytes: &[u8]) -> Result<Self> {
        let mut surface = Self::new(title);

        let mut font_warnings = Vec::new();
        let font = ParsedFont::from_bytes(font_bytes, 0, &mut font_warnings)
            .ok_or_else(|| LoteriaError::Pdf("Failed to parse font".to_string()))?;
        let font_id = surface.doc.add_font(&font);
        surface.font = Some((font, font_id));

        Ok(surface)
    }

    /// Serialize all finalized pages.
    ///
    /// Commands drawn after the last `show_page` are finalized as one more page.
    pub fn finish(mut self) -> Vec<u8> {
        if !self.ops.is_empty() {
            self.show_page();
        }

        let mut warnings = Vec::new();
        let bytes = self.doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            log::debug!("PDF serialization produced {} warnings", warnings.len());
        }
        bytes
    }

    fn push_styled(&mut self, ops: impl IntoIterator<Item = Op>) {
        self.ops.push(Op::SaveGraphicsState);
        self.ops.extend(ops);
        self.ops.push(Op::RestoreGraphicsState);
    }
}

fn pdf_color(color: Color) -> printpdf::Color {
    printpdf::Color::Rgb(Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
        icc_profile: None,
    })
}

fn corner(x: f32, y: f32) -> LinePoint {
    LinePoint {
        p: Point { x: Pt(x), y: Pt(y) },
        bezier: false,
    }
}

fn handle(x: f32, y: f32) -> LinePoint {
    LinePoint {
        p: Point { x: Pt(x), y: Pt(y) },
        bezier: true,
    }
}

fn rect_points(rect: Rect) -> Vec<LinePoint> {
    vec![
        corner(rect.left(), rect.bottom()),
        corner(rect.right(), rect.bottom()),
        corner(rect.right(), rect.top()),
        corner(rect.left(), rect.top()),
    ]
}

fn rounded_rect_points(rect: Rect, radius: f32) -> Vec<LinePoint> {
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0);
    let k = r * KAPPA;
    let (l, b, rt, t) = (rect.left(), rect.bottom(), rect.right(), rect.top());

    vec![
        corner(l + r, b),
        corner(rt - r, b),
        handle(rt - r + k, b),
        handle(rt, b + r - k),
        corner(rt, b + r),
        corner(rt, t - r),
        handle(rt, t - r + k),
        handle(rt - r + k, t),
        corner(rt - r, t),
        corner(l + r, t),
        handle(l + r - k, t),
        handle(l, t - r + k),
        corner(l, t - r),
        corner(l, b + r),
        handle(l, b + r - k),
        handle(l + r - k, b),
    ]
}

fn stroke_ops(points: Vec<LinePoint>, stroke: StrokeStyle) -> [Op; 3] {
    [
        Op::SetOutlineColor {
            col: pdf_color(stroke.color),
        },
        Op::SetOutlineThickness {
            pt: Pt(stroke.width),
        },
        Op::DrawLine {
            line: Line {
                points,
                is_closed: true,
            },
        },
    ]
}

/// Pixel data for printpdf. Images with an alpha channel keep it, and printpdf
/// writes it out as a soft mask so the page shows through.
fn raw_image(image: &DynamicImage) -> RawImage {
    let (pixels, data_format) = if image.color().has_alpha() {
        (image.to_rgba8().into_raw(), RawImageFormat::RGBA8)
    } else {
        (image.to_rgb8().into_raw(), RawImageFormat::RGB8)
    };

    RawImage {
        pixels: RawImageData::U8(pixels),
        width: image.width() as usize,
        height: image.height() as usize,
        data_format,
        tag: Vec::new(),
    }
}

fn builtin(font: FontFace) -> BuiltinFont {
    match font {
        FontFace::Regular => BuiltinFont::Helvetica,
        FontFace::Bold => BuiltinFont::HelveticaBold,
    }
}

impl TextMeasure for PdfSurface {
    fn text_width(&self, text: &str, font: FontFace, size: f32) -> f32 {
        match &self.font {
            Some((parsed, _)) => {
                // Advances are in font units, usually 1000 or 2048 per em
                let units_per_em = parsed.font_metrics.units_per_em.max(1) as f32;
                let mut text_width = 0.0;
                for ch in text.chars() {
                    if let Some(glyph_id) = parsed.lookup_glyph_index(ch as u32) {
                        let advance = parsed.get_horizontal_advance(glyph_id);
                        text_width += (advance as f32 / units_per_em) * size;
                    }
                }
                text_width
            }
            None => BuiltinMetrics.text_width(text, font, size),
        }
    }
}

impl DrawingSurface for PdfSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let polygon = Polygon {
            rings: vec![PolygonRing {
                points: rect_points(rect),
            }],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        };
        self.push_styled([
            Op::SetFillColor {
                col: pdf_color(color),
            },
            Op::DrawPolygon { polygon },
        ]);
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: StrokeStyle) {
        self.push_styled(stroke_ops(rect_points(rect), stroke));
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, stroke: StrokeStyle) {
        self.push_styled(stroke_ops(rounded_rect_points(rect, radius), stroke));
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), stroke: StrokeStyle) {
        self.push_styled([
            Op::SetOutlineColor {
                col: pdf_color(stroke.color),
            },
            Op::SetOutlineThickness {
                pt: Pt(stroke.width),
            },
            Op::DrawLine {
                line: Line {
                    points: vec![corner(from.0, from.1), corner(to.0, to.1)],
                    is_closed: false,
                },
            },
        ]);
    }

    fn text(&mut self, x: f32, y: f32, text: &str, style: &TextStyle) {
        let mut ops = vec![
            Op::SetFillColor {
                col: pdf_color(style.color),
            },
            Op::StartTextSection,
        ];

        match &self.font {
            Some((_, font_id)) => {
                ops.push(Op::SetFontSize {
                    font: font_id.clone(),
                    size: Pt(style.size),
                });
                ops.push(Op::SetTextMatrix {
                    matrix: TextMatrix::Translate(Pt(x), Pt(y)),
                });
                ops.push(Op::WriteText {
                    items: vec![TextItem::Text(text.to_string())],
                    font: font_id.clone(),
                });
            }
            None => {
                ops.push(Op::SetTextCursor {
                    pos: Point { x: Pt(x), y: Pt(y) },
                });
                ops.push(Op::SetFontSizeBuiltinFont {
                    font: builtin(style.font),
                    size: Pt(style.size),
                });
                ops.push(Op::WriteTextBuiltinFont {
                    items: vec![TextItem::Text(text.to_string())],
                    font: builtin(style.font),
                });
            }
        }

        ops.push(Op::EndTextSection);
        self.push_styled(ops);
    }

    fn image(&mut self, image: &DynamicImage, rect: Rect) -> Result<()> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(LoteriaError::Pdf("Cannot place an empty image".to_string()));
        }

        let id = self.doc.add_image(&raw_image(image));

        // At 72 dpi one pixel is one point, so the scale is points per pixel
        self.push_styled([Op::UseXobject {
            id,
            transform: XObjectTransform {
                translate_x: Some(Pt(rect.x)),
                translate_y: Some(Pt(rect.y)),
                rotate: None,
                scale_x: Some(rect.width / width as f32),
                scale_y: Some(rect.height / height as f32),
                dpi: Some(72.0),
            },
        }]);

        Ok(())
    }

    fn show_page(&mut self) {
        let ops = std::mem::take(&mut self.ops);
        self.doc.pages.push(PdfPage::new(
            Mm(pt_to_mm(self.page_width_pt)),
            Mm(pt_to_mm(self.page_height_pt)),
            ops,
        ));
    }

    fn page_count(&self) -> usize {
        self.doc.pages.len()
    }
}
